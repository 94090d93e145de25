//! End-to-end pipeline: separable word sets through extraction,
//! normalization, training and decoding.

use network::{train_until, Network, TrainConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn separable_concepts_reach_full_position_matched_accuracy() {
    // concept 0: vowel-initial words, concept 1: bilabial-initial words
    let train_words = [
        "ana", "eli", "omo", "ivo", "una", "aro", "edo", "iko", // block 0
        "mia", "bob", "pia", "mak", "bor", "pem", "mul", "bip", // block 1
    ];
    // test list curated so that word i belongs to concept i
    let test_words = ["ada", "mip"];

    let (train_matrix, _) = features::normalize(&features::extract_all(&train_words)).unwrap();
    let (test_matrix, _) = features::normalize(&features::extract_all(&test_words)).unwrap();
    let targets = lexicon::one_hot(train_words.len(), 2, 8);

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut net = Network::random(&[features::NUM_FEATURES, 24, 24, 2], &mut rng);
    let cfg = TrainConfig {
        learning_rate: 0.5,
        error_goal: 0.01,
        max_epochs: 50_000,
    };
    let summary = train_until(&mut net, &train_matrix, &targets, cfg, |_, _| {}).unwrap();
    assert!(summary.error <= cfg.error_goal);

    let mut correct = 0;
    for (position, row) in test_matrix.iter().enumerate() {
        let prediction = lexicon::decode(&net.predict(row)).unwrap();
        if prediction.index == position {
            correct += 1;
        }
    }
    assert_eq!(correct, test_words.len(), "every test word must match its position");
}

#[test]
fn bundled_word_lists_are_well_formed() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

    let croatian = lexicon::wordlist::read_words(format!("{dir}/croatian.txt")).unwrap();
    assert_eq!(croatian.len(), lexicon::CONCEPTS.len());
    assert_eq!(croatian.first().map(String::as_str), Some("nogomet"));

    let train = lexicon::wordlist::read_words(format!("{dir}/slavic_train.txt")).unwrap();
    assert_eq!(train.len(), croatian.len() * 8, "8 translations per concept");

    let test = lexicon::wordlist::read_words(format!("{dir}/slavic_test.txt")).unwrap();
    assert_eq!(test.len(), croatian.len(), "one test word per concept");
}
