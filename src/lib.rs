//! `chusen`: randomized selection primitives.
//!
//! Small, generic helpers for picking things at random from a slice without
//! touching it.
//!
//! Exposed modules:
//! - `choice`: uniform choice of an element or index, and probability gates.
//! - `weighted`: weighted choice with unsigned integer weights.
//! - `sample`: sampling without replacement (index set / partial shuffle).
//! - `error`: the shared error type.
//!
//! Every operation has a convenience form using `rand::rng()` and a
//! `*_with_rng` form taking any `rand::Rng`.
//!
//! ```
//! let words: Vec<&str> = "ink runs from the corners of my mouth".split(' ').collect();
//! let three = chusen::sample(3, &words)?;
//! assert_eq!(three.len(), 3);
//! # Ok::<(), chusen::SelectionError>(())
//! ```

#![forbid(unsafe_code)]

pub mod choice;
pub mod error;
pub mod sample;
pub mod weighted;

pub use choice::{
    choose, choose_index, choose_index_with_rng, choose_with_rng, with_probability,
    with_probability_with_rng,
};
pub use error::{Result, SelectionError};
pub use sample::{
    sample, sample_with_rng, sample_with_strategy, Sampler, Strategy,
    DEFAULT_DENSE_THRESHOLD_PERCENT,
};
pub use weighted::{
    total_weight, weighted_choice, weighted_choice_index_with_rng, weighted_choice_with_rng,
    Weight, WeightedElement,
};
