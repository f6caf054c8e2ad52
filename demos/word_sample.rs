//! Sampling, choice and weighted choice over a short word list.
//!
//! Logs at TRACE, so the strategy each `sample` call picks is printed too.

use chusen::{
    choose_with_rng, sample_with_rng, weighted_choice_with_rng, with_probability, Sampler,
    Strategy, WeightedElement,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let words: Vec<&str> = "ink runs from the corners of my mouth"
        .split_whitespace()
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // 2 of 8 is 25%: index set. 6 of 8 is 75%: partial shuffle.
    println!("sample(2):  {:?}", sample_with_rng(2, &words, &mut rng)?);
    println!("sample(6):  {:?}", sample_with_rng(6, &words, &mut rng)?);
    println!("choose:     {}", choose_with_rng(&words, &mut rng)?);

    let seeded = Sampler::new()
        .with_seed(7)
        .with_strategy(Strategy::FullShuffle);
    println!("seeded(3):  {:?}", seeded.sample(3, &words)?);

    let list = vec![
        WeightedElement::new("first", 20u32),
        WeightedElement::new("second", 30),
        WeightedElement::new("third", 10),
    ];
    println!("weighted:   {}", weighted_choice_with_rng(&list, &mut rng)?);

    println!("p=1.0: {}  p=0.0: {}", with_probability(1.0), with_probability(0.0));

    if let Err(e) = sample_with_rng(9, &words, &mut rng) {
        println!("sample(9):  {e}");
    }

    Ok(())
}
