#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Phonetic/orthographic word features and min-max column scaling.
//!
//! Contract: identical input word -> identical feature vector. Extraction is
//! total over any string; scaling is pure and returns the column maxima it
//! used instead of mutating its input.

/// Number of features derived from one word.
pub const NUM_FEATURES: usize = 16;

/// Weight a character class earns when it claims the word's first character.
const FIRST_POSITION_WEIGHT: f32 = 5.0;

/// Mutually exclusive character classes, listed in match-priority order.
///
/// A character belongs to the first class whose letter set contains it and to
/// that class only; characters outside every set count toward no class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// a, e, i, o, u
    Vowel,
    /// m, b, p
    Bilabial,
    /// v, f
    Labiodental,
    /// k, g, h
    Velar,
    /// l, r
    Alveolar,
    /// j
    Palatal,
    /// d, t, n, c, z, s
    Dental,
}

/// Ordered dispatch table; the first row containing the character wins.
const CLASS_TABLE: &[(&str, CharClass)] = &[
    ("aeiou", CharClass::Vowel),
    ("mbp", CharClass::Bilabial),
    ("vf", CharClass::Labiodental),
    ("kgh", CharClass::Velar),
    ("lr", CharClass::Alveolar),
    ("j", CharClass::Palatal),
    ("dtnczs", CharClass::Dental),
];

/// First matching class for `c`, or `None` for characters outside the
/// taxonomy (digits, punctuation, letters like q/w/x/y).
pub fn class_of(c: char) -> Option<CharClass> {
    CLASS_TABLE
        .iter()
        .find(|(letters, _)| letters.contains(c))
        .map(|(_, class)| *class)
}

/// Running weighted count per character class.
#[derive(Debug, Default)]
struct ClassCounts {
    vowel: f32,
    bilabial: f32,
    labiodental: f32,
    velar: f32,
    alveolar: f32,
    palatal: f32,
    dental: f32,
}

impl ClassCounts {
    fn add(&mut self, class: CharClass, weight: f32) {
        match class {
            CharClass::Vowel => self.vowel += weight,
            CharClass::Bilabial => self.bilabial += weight,
            CharClass::Labiodental => self.labiodental += weight,
            CharClass::Velar => self.velar += weight,
            CharClass::Alveolar => self.alveolar += weight,
            CharClass::Palatal => self.palatal += weight,
            CharClass::Dental => self.dental += weight,
        }
    }
}

/// Derive the 16-element feature vector of `word`.
///
/// Layout:
/// - `[0]` word length in characters
/// - `[1..=7]` weighted class counts (vowel, bilabial, labiodental, velar,
///   alveolar, palatal, dental); the first character contributes
///   `FIRST_POSITION_WEIGHT`, every later character contributes 1
/// - `[8..=12]` unweighted occurrence counts of a, e, i, o, u
/// - `[13]` sum of character code points
/// - `[14]` code point of the first character (0 for the empty word)
/// - `[15]` code point of the last character (0 for the empty word)
///
/// A length-1 word is its own first and last character and still earns the
/// first-position weight.
pub fn extract(word: &str) -> [f32; NUM_FEATURES] {
    let mut classes = ClassCounts::default();
    let (mut a, mut e, mut i, mut o, mut u) = (0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32);
    let mut length = 0.0f32;
    let mut code_sum = 0.0f32;
    let mut first_code = 0.0f32;
    let mut last_code = 0.0f32;

    for (pos, c) in word.chars().enumerate() {
        let code = c as u32 as f32;
        length += 1.0;
        code_sum += code;
        if pos == 0 {
            first_code = code;
        }
        last_code = code;

        match c {
            'a' => a += 1.0,
            'e' => e += 1.0,
            'i' => i += 1.0,
            'o' => o += 1.0,
            'u' => u += 1.0,
            _ => {}
        }

        if let Some(class) = class_of(c) {
            let weight = if pos == 0 { FIRST_POSITION_WEIGHT } else { 1.0 };
            classes.add(class, weight);
        }
    }

    [
        length,
        classes.vowel,
        classes.bilabial,
        classes.labiodental,
        classes.velar,
        classes.alveolar,
        classes.palatal,
        classes.dental,
        a,
        e,
        i,
        o,
        u,
        code_sum,
        first_code,
        last_code,
    ]
}

/// Build a feature matrix, one row per word, preserving word order.
pub fn extract_all<S: AsRef<str>>(words: &[S]) -> Vec<Vec<f32>> {
    words
        .iter()
        .map(|w| extract(w.as_ref()).to_vec())
        .collect()
}

/// Error type for matrix operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    /// Rows of the matrix have unequal widths.
    #[error("matrix rows have unequal widths")]
    RaggedMatrix,
}

/// Per-column maxima of `rows`, with an implicit floor of 0 (features are
/// non-negative counts and code points by construction).
pub fn column_maxima(rows: &[Vec<f32>]) -> Result<Vec<f32>, FeatureError> {
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    if rows.iter().any(|r| r.len() != width) {
        return Err(FeatureError::RaggedMatrix);
    }
    let mut maxima = vec![0.0f32; width];
    for row in rows {
        for (max, value) in maxima.iter_mut().zip(row) {
            if *value > *max {
                *max = *value;
            }
        }
    }
    Ok(maxima)
}

/// Min-max scale every column of `rows` by its own maximum.
///
/// Returns a fresh matrix plus the maxima used. Columns whose maximum is 0
/// are left untouched (every cell there is already 0), so no division by
/// zero can occur. Each matrix is scaled by its own statistics only; callers
/// normalize training and test matrices separately.
pub fn normalize(rows: &[Vec<f32>]) -> Result<(Vec<Vec<f32>>, Vec<f32>), FeatureError> {
    let maxima = column_maxima(rows)?;
    let scaled = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&maxima)
                .map(|(value, max)| if *max != 0.0 { value / max } else { *value })
                .collect()
        })
        .collect();
    Ok((scaled, maxima))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_is_all_zero() {
        assert_eq!(extract(""), [0.0; NUM_FEATURES]);
    }

    #[test]
    fn length_and_code_sum() {
        let f = extract("kos");
        let expected_sum = ('k' as u32 + 'o' as u32 + 's' as u32) as f32;
        assert_eq!(f.first().copied(), Some(3.0));
        assert_eq!(f.get(13).copied(), Some(expected_sum));
    }

    #[test]
    fn single_character_word_gets_first_position_bonus() {
        let f = extract("m");
        // first and last codes are the same single character
        assert_eq!(f.get(14), f.get(15));
        assert_eq!(f.get(14).copied(), Some('m' as u32 as f32));
        // bilabial weighted count is 5, never 1
        assert_eq!(f.get(2).copied(), Some(5.0));
    }

    #[test]
    fn weighted_and_unweighted_vowel_counts_are_independent() {
        let f = extract("aaa");
        // 5 for the first character plus 1 for each of the other two
        assert_eq!(f.get(1).copied(), Some(7.0));
        // plain occurrence count of 'a'
        assert_eq!(f.get(8).copied(), Some(3.0));
    }

    #[test]
    fn first_match_wins_across_classes() {
        // every taxonomy character belongs to exactly one class
        for c in "aeioumbpvfkghlrjdtnczs".chars() {
            assert!(class_of(c).is_some(), "no class for {c}");
        }
        assert_eq!(class_of('q'), None);
        assert_eq!(class_of('w'), None);
    }

    #[test]
    fn full_vector_for_known_word() {
        // "mraz": m first (bilabial +5), r alveolar, a vowel, z dental
        let f = extract("mraz");
        let codes = ('m' as u32 + 'r' as u32 + 'a' as u32 + 'z' as u32) as f32;
        let expected = [
            4.0, 1.0, 5.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, codes,
            'm' as u32 as f32, 'z' as u32 as f32,
        ];
        assert_eq!(f, expected);
    }

    #[test]
    fn extract_all_preserves_order() {
        let words = ["ana", "bor"];
        let rows = extract_all(&words);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.first().map(|r| r.len()), Some(NUM_FEATURES));
        assert_eq!(
            rows.first().and_then(|r| r.first()).copied(),
            Some(3.0)
        );
    }

    #[test]
    fn normalize_scales_each_column_by_its_maximum() {
        let rows = vec![vec![1.0, 10.0], vec![2.0, 5.0]];
        let (scaled, maxima) = normalize(&rows).unwrap();
        assert_eq!(maxima, vec![2.0, 10.0]);
        assert_eq!(scaled, vec![vec![0.5, 1.0], vec![1.0, 0.5]]);
    }

    #[test]
    fn normalize_is_idempotent_on_prenormalized_matrix() {
        let rows = vec![vec![0.5, 1.0], vec![1.0, 0.25]];
        let (once, _) = normalize(&rows).unwrap();
        let (twice, maxima) = normalize(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(maxima, vec![1.0, 1.0]);
    }

    #[test]
    fn zero_column_stays_zero() {
        let rows = vec![vec![0.0, 3.0], vec![0.0, 6.0]];
        let (scaled, maxima) = normalize(&rows).unwrap();
        assert_eq!(maxima, vec![0.0, 6.0]);
        assert_eq!(scaled, vec![vec![0.0, 0.5], vec![0.0, 1.0]]);
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let rows = vec![vec![1.0], vec![1.0, 2.0]];
        assert_eq!(normalize(&rows), Err(FeatureError::RaggedMatrix));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn length_feature_matches_char_count(word in "[a-z]{0,24}") {
                let f = extract(&word);
                prop_assert_eq!(f.first().copied(), Some(word.chars().count() as f32));
            }

            #[test]
            fn code_sum_matches_chars(word in "[a-z]{0,24}") {
                let f = extract(&word);
                let sum: f32 = word.chars().map(|c| c as u32 as f32).sum();
                prop_assert_eq!(f.get(13).copied(), Some(sum));
            }

            #[test]
            fn normalized_cells_never_exceed_one(
                rows in proptest::collection::vec(
                    proptest::collection::vec(0.0f32..1000.0, 4),
                    1..8,
                )
            ) {
                let (scaled, _) = normalize(&rows).unwrap();
                for row in &scaled {
                    for v in row {
                        prop_assert!(*v <= 1.0 + f32::EPSILON);
                    }
                }
            }
        }
    }
}
