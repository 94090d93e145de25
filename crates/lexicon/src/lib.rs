#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! The fixed Croatian sport-concept taxonomy, block one-hot label encoding
//! and arg-max output decoding.

pub mod wordlist;

/// Label printed when a raw output index falls outside the taxonomy.
pub const NOT_FOUND_LABEL: &str = "rjesenje nije nadjeno";

/// One of the 12 fixed Croatian sport concepts the classifier can predict.
///
/// The discriminant order is load-bearing: it matches both the output layer
/// columns and the block order of the training word lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Concept {
    /// nogomet
    Football,
    /// kosarka
    Basketball,
    /// rukomet
    Handball,
    /// plivanje
    Swimming,
    /// natjecanje
    Competition,
    /// lopta
    Ball,
    /// trcanje
    Running,
    /// trofej
    Trophy,
    /// medalja
    Medal,
    /// skijanje
    Skiing,
    /// hokej
    Hockey,
    /// vaterpolo
    WaterPolo,
}

/// All concepts in output-column order.
pub const CONCEPTS: [Concept; 12] = [
    Concept::Football,
    Concept::Basketball,
    Concept::Handball,
    Concept::Swimming,
    Concept::Competition,
    Concept::Ball,
    Concept::Running,
    Concept::Trophy,
    Concept::Medal,
    Concept::Skiing,
    Concept::Hockey,
    Concept::WaterPolo,
];

impl Concept {
    /// Concept at output column `index`, or `None` outside the taxonomy.
    pub fn from_index(index: usize) -> Option<Concept> {
        CONCEPTS.get(index).copied()
    }

    /// Croatian label of the concept.
    pub fn label(self) -> &'static str {
        match self {
            Concept::Football => "nogomet",
            Concept::Basketball => "kosarka",
            Concept::Handball => "rukomet",
            Concept::Swimming => "plivanje",
            Concept::Competition => "natjecanje",
            Concept::Ball => "lopta",
            Concept::Running => "trcanje",
            Concept::Trophy => "trofej",
            Concept::Medal => "medalja",
            Concept::Skiing => "skijanje",
            Concept::Hockey => "hokej",
            Concept::WaterPolo => "vaterpolo",
        }
    }
}

/// One-hot target matrix for `num_words` training words grouped in
/// contiguous blocks of `block_size`, block 0 mapping to column 0 and so on.
///
/// The caller is expected to pass `num_words == num_concepts * block_size`.
/// If the word list is longer, the surplus words keep the last valid column
/// (a documented degenerate case, warned about but never fatal).
pub fn one_hot(num_words: usize, num_concepts: usize, block_size: usize) -> Vec<Vec<f32>> {
    if block_size > 0 && num_concepts > 0 && num_words != num_concepts * block_size {
        log::warn!(
            "word count {num_words} is not {num_concepts} concepts x {block_size} per block; \
             trailing words degrade to the last concept column"
        );
    }
    (0..num_words)
        .map(|word| {
            let column = if block_size == 0 {
                0
            } else {
                (word / block_size).min(num_concepts.saturating_sub(1))
            };
            (0..num_concepts)
                .map(|col| if col == column { 1.0 } else { 0.0 })
                .collect()
        })
        .collect()
}

/// A decoded network output: the winning column and the concept it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Index of the maximum output value.
    pub index: usize,
    /// Concept at that index, `None` if the index falls outside the taxonomy.
    pub concept: Option<Concept>,
}

impl Decoded {
    /// Croatian label of the predicted concept, or the not-found label.
    pub fn label(&self) -> &'static str {
        self.concept.map(Concept::label).unwrap_or(NOT_FOUND_LABEL)
    }
}

/// Arg-max decision rule over a raw output vector.
///
/// The scan only replaces the current winner on a strictly greater value, so
/// ties keep the lowest index. Returns `None` for an empty slice.
pub fn decode(output: &[f32]) -> Option<Decoded> {
    let mut winner: Option<(usize, f32)> = None;
    for (index, &value) in output.iter().enumerate() {
        match winner {
            Some((_, best)) if value <= best => {}
            _ => winner = Some((index, value)),
        }
    }
    winner.map(|(index, _)| Decoded {
        index,
        concept: Concept::from_index(index),
    })
}
