//! Weighted choice by linear-scan CDF inversion.
//!
//! Element `i` is picked with probability `w_i / Σw`: draw `r` uniformly in
//! `[0, Σw)`, walk the population in order subtracting each weight, and stop
//! at the first element whose weight exceeds what is left of `r`.
//!
//! Weights are unsigned integers. They are accumulated in a `u128`, so the
//! maximum safe total is `u128::MAX`; with at most `usize::MAX` elements of at
//! most `u64::MAX` each, that bound cannot be reached.

use rand::prelude::*;
use tracing::debug;

use crate::error::{Result, SelectionError};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types usable as weights.
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64` and `usize`.
pub trait Weight: Copy + sealed::Sealed {
    /// Widen to the `u128` accumulator.
    fn to_u128(self) -> u128;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Weight for $t {
                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, usize);

/// An element paired with its relative selection weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedElement<T, W> {
    /// The candidate value.
    pub element: T,
    /// Relative weight; zero means never selected.
    pub weight: W,
}

impl<T, W: Weight> WeightedElement<T, W> {
    /// Pair `element` with `weight`.
    pub fn new(element: T, weight: W) -> Self {
        Self { element, weight }
    }
}

impl<T, W: Weight> From<(T, W)> for WeightedElement<T, W> {
    fn from((element, weight): (T, W)) -> Self {
        Self::new(element, weight)
    }
}

/// Sum of all weights in `population`.
pub fn total_weight<T, W: Weight>(population: &[WeightedElement<T, W>]) -> u128 {
    population.iter().map(|c| c.weight.to_u128()).sum()
}

/// Pick one element with probability proportional to its weight.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidWeights`] if `population` is empty or its
/// weights sum to zero.
pub fn weighted_choice<T, W: Weight>(population: &[WeightedElement<T, W>]) -> Result<&T> {
    let mut rng = rand::rng();
    weighted_choice_with_rng(population, &mut rng)
}

/// [`weighted_choice`] with a caller-supplied RNG.
pub fn weighted_choice_with_rng<'a, T, W: Weight, R: Rng + ?Sized>(
    population: &'a [WeightedElement<T, W>],
    rng: &mut R,
) -> Result<&'a T> {
    let idx = weighted_choice_index_with_rng(population, rng)?;
    Ok(&population[idx].element)
}

/// Like [`weighted_choice_with_rng`], but returns the index of the chosen element.
pub fn weighted_choice_index_with_rng<T, W: Weight, R: Rng + ?Sized>(
    population: &[WeightedElement<T, W>],
    rng: &mut R,
) -> Result<usize> {
    let total = total_weight(population);
    if total == 0 {
        debug!(len = population.len(), "weighted_choice: rejected zero total weight");
        return Err(SelectionError::InvalidWeights {
            len: population.len(),
        });
    }
    let r = rng.random_range(0..total);
    Ok(locate(population, r))
}

/// Index of the band containing `r`, for `r < total_weight(population)`.
fn locate<T, W: Weight>(population: &[WeightedElement<T, W>], mut r: u128) -> usize {
    for (i, c) in population.iter().enumerate() {
        let w = c.weight.to_u128();
        if r < w {
            return i;
        }
        r -= w;
    }
    // Unreachable while r < total; the last positive-weight element owns the top band.
    population
        .iter()
        .rposition(|c| c.weight.to_u128() > 0)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bands() -> Vec<WeightedElement<&'static str, u32>> {
        vec![
            WeightedElement::new("first", 20),
            WeightedElement::new("second", 30),
            WeightedElement::new("third", 10),
        ]
    }

    #[test]
    fn draw_in_second_band_picks_second() {
        let list = bands();
        assert_eq!(list[locate(&list, 25)].element, "second");
    }

    #[test]
    fn band_edges() {
        let list = bands();
        let pick = |r| list[locate(&list, r)].element;
        assert_eq!(pick(0), "first");
        assert_eq!(pick(19), "first");
        assert_eq!(pick(20), "second");
        assert_eq!(pick(49), "second");
        assert_eq!(pick(50), "third");
        assert_eq!(pick(59), "third");
    }

    #[test]
    fn zero_weights_are_skipped() {
        let list = vec![
            WeightedElement::new('a', 0u8),
            WeightedElement::new('b', 3),
            WeightedElement::new('c', 0),
        ];
        for r in 0..3 {
            assert_eq!(list[locate(&list, r)].element, 'b');
        }
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            assert_eq!(*weighted_choice_with_rng(&list, &mut rng).expect("ok"), 'b');
        }
    }

    #[test]
    fn rejects_empty_and_zero_total() {
        let empty: Vec<WeightedElement<u8, u64>> = Vec::new();
        assert_eq!(
            weighted_choice(&empty),
            Err(SelectionError::InvalidWeights { len: 0 })
        );

        let zeros = vec![WeightedElement::new(1, 0usize), WeightedElement::new(2, 0)];
        assert_eq!(
            weighted_choice(&zeros),
            Err(SelectionError::InvalidWeights { len: 2 })
        );
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let list = vec![
            WeightedElement::new("x", u64::MAX),
            WeightedElement::new("y", u64::MAX),
        ];
        assert_eq!(total_weight(&list), 2 * u64::MAX as u128);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let picked = weighted_choice_with_rng(&list, &mut rng).expect("ok");
        assert!(*picked == "x" || *picked == "y");
    }

    #[test]
    fn frequencies_follow_weights() {
        let list = bands();
        let trials = 60_000;
        let mut counts = [0usize; 3];
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..trials {
            counts[weighted_choice_index_with_rng(&list, &mut rng).expect("ok")] += 1;
        }

        let expected = [20_000.0, 30_000.0, 10_000.0];
        let chi2: f64 = counts
            .iter()
            .zip(expected)
            .map(|(&c, e)| {
                let diff = c as f64 - e;
                diff * diff / e
            })
            .sum();

        // df = 2
        assert!(chi2 < 20.0, "chi2 too large ({chi2:.2}). counts={counts:?}");
    }

    #[test]
    fn tuple_conversion() {
        let e: WeightedElement<&str, u16> = ("k", 4u16).into();
        assert_eq!(e, WeightedElement::new("k", 4));
    }
}
