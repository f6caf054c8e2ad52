//! Uniform choice and probability gates.
//!
//! Each operation comes in two forms: a convenience form drawing from
//! `rand::rng()` (thread-local, so callers on different threads never share
//! generator state), and a `*_with_rng` form for deterministic tests and
//! benchmarks.

use rand::prelude::*;
use tracing::debug;

use crate::error::{Result, SelectionError};

/// Pick one element uniformly at random.
///
/// # Errors
///
/// Returns [`SelectionError::EmptyPopulation`] if `population` is empty.
/// This is a contract violation on the caller's side, not a transient failure.
pub fn choose<T>(population: &[T]) -> Result<&T> {
    let mut rng = rand::rng();
    choose_with_rng(population, &mut rng)
}

/// [`choose`] with a caller-supplied RNG.
pub fn choose_with_rng<'a, T, R: Rng + ?Sized>(
    population: &'a [T],
    rng: &mut R,
) -> Result<&'a T> {
    let idx = choose_index_with_rng(population, rng)?;
    Ok(&population[idx])
}

/// Pick one index of `population` uniformly at random.
///
/// # Errors
///
/// Returns [`SelectionError::EmptyPopulation`] if `population` is empty.
pub fn choose_index<T>(population: &[T]) -> Result<usize> {
    let mut rng = rand::rng();
    choose_index_with_rng(population, &mut rng)
}

/// [`choose_index`] with a caller-supplied RNG.
pub fn choose_index_with_rng<T, R: Rng + ?Sized>(
    population: &[T],
    rng: &mut R,
) -> Result<usize> {
    if population.is_empty() {
        debug!("choose: rejected empty population");
        return Err(SelectionError::EmptyPopulation);
    }
    Ok(rng.random_range(0..population.len()))
}

/// Return `true` with probability `p`.
///
/// Draws `u ~ Uniform[0, 1)` and returns `u < p`. Values outside `[0, 1]` are
/// allowed: `p <= 0` is always `false`, `p >= 1` is always `true`, and `NaN`
/// is always `false`.
pub fn with_probability(p: f64) -> bool {
    let mut rng = rand::rng();
    with_probability_with_rng(p, &mut rng)
}

/// [`with_probability`] with a caller-supplied RNG.
#[inline]
pub fn with_probability_with_rng<R: Rng + ?Sized>(p: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < p
}
