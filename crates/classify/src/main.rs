use anyhow::{Context, Result};
use lexicon::{decode, wordlist, CONCEPTS, NOT_FOUND_LABEL};
use network::{train_until, Network, TrainConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Foreign translations per Croatian concept in the training list.
const BLOCK_SIZE: usize = 8;
/// Width of both hidden layers.
const HIDDEN_UNITS: usize = 80;

const LEARNING_RATE: f32 = 0.5;
const ERROR_GOAL: f32 = 0.01;
const MAX_EPOCHS: usize = 10_000;

const DEFAULT_TRAIN: &str = "crates/classify/data/slavic_train.txt";
const DEFAULT_TEST: &str = "crates/classify/data/slavic_test.txt";
const DEFAULT_CROATIAN: &str = "crates/classify/data/croatian.txt";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let train_path = args.next().unwrap_or_else(|| DEFAULT_TRAIN.to_string());
    let test_path = args.next().unwrap_or_else(|| DEFAULT_TEST.to_string());
    let croatian_path = args.next().unwrap_or_else(|| DEFAULT_CROATIAN.to_string());

    let croatian = wordlist::read_words(&croatian_path)
        .with_context(|| format!("reading croatian word list {croatian_path}"))?;
    let train_words = wordlist::read_words(&train_path)
        .with_context(|| format!("reading training word list {train_path}"))?;
    let test_words = wordlist::read_words(&test_path)
        .with_context(|| format!("reading test word list {test_path}"))?;

    let num_concepts = CONCEPTS.len();
    if croatian.len() != num_concepts {
        log::warn!(
            "croatian list has {} words, taxonomy has {num_concepts} concepts",
            croatian.len()
        );
    }
    log::info!(
        "{} training words, {} test words, {num_concepts} concepts",
        train_words.len(),
        test_words.len()
    );

    // Each matrix is scaled by its own column maxima.
    let (train_matrix, _) = features::normalize(&features::extract_all(&train_words))
        .context("normalizing training features")?;
    let (test_matrix, _) = features::normalize(&features::extract_all(&test_words))
        .context("normalizing test features")?;
    let targets = lexicon::one_hot(train_words.len(), num_concepts, BLOCK_SIZE);

    let mut rng = ChaCha8Rng::from_entropy();
    let mut net = Network::random(
        &[
            features::NUM_FEATURES,
            HIDDEN_UNITS,
            HIDDEN_UNITS,
            num_concepts,
        ],
        &mut rng,
    );

    let cfg = TrainConfig {
        learning_rate: LEARNING_RATE,
        error_goal: ERROR_GOAL,
        max_epochs: MAX_EPOCHS,
    };
    let summary = train_until(&mut net, &train_matrix, &targets, cfg, |epoch, error| {
        println!("Epoch #{epoch} Error: {:.4}%", error * 100.0);
    })
    .context("training the classifier")?;
    println!(
        "Konvergirano nakon {} epoha (mse {:.5})",
        summary.epochs, summary.error
    );

    println!("=== Rezultati ===");
    println!("strana rijec -> hrvatski pojam");
    let mut correct = 0usize;
    for (position, (word, row)) in test_words.iter().zip(&test_matrix).enumerate() {
        let output = net.predict(row);
        match decode(&output) {
            Some(prediction) => {
                println!("{word} -> {}", prediction.label());
                // test lists are curated so that word i belongs to concept i
                if prediction.index == position {
                    correct += 1;
                }
            }
            None => println!("{word} -> {NOT_FOUND_LABEL}"),
        }
    }

    let accuracy = if test_words.is_empty() {
        0.0
    } else {
        correct as f64 / test_words.len() as f64 * 100.0
    };
    println!("Tocnost testnog skupa: {accuracy:.1}%");

    Ok(())
}
