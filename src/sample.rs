//! Sampling without replacement.
//!
//! Draws `k` elements from distinct slots of a population of size `n`. Every
//! `k`-subset is equally likely and the population is never modified: the
//! sparse path works on an independent index set, the dense paths on a scratch
//! copy.
//!
//! Three strategies are available:
//!
//! - [`Strategy::IndexSet`]: draw indices into a set, redrawing on collision.
//!   O(k) expected draws while `k ≪ n`, degrading as `k → n`.
//! - [`Strategy::PartialShuffle`]: partial Fisher–Yates over a copy. Exactly
//!   `k` draws, but an O(n) copy regardless of `k`.
//! - [`Strategy::FullShuffle`]: shuffle a full copy and truncate. `n - 1`
//!   draws; kept as a baseline for benchmarks.
//!
//! [`sample`] picks between the first two by the percentage `100·k / n`:
//! at or below [`DEFAULT_DENSE_THRESHOLD_PERCENT`] the index set wins. The
//! threshold only affects speed; [`Sampler`] can tune it or force a strategy.

use std::collections::HashSet;

use rand::prelude::*;
use tracing::{debug, trace};

use crate::error::{Result, SelectionError};

/// Sample ratio (in percent) at or below which the index-set strategy is used.
pub const DEFAULT_DENSE_THRESHOLD_PERCENT: u32 = 30;

/// Algorithm used to draw a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Rejection sampling of distinct indices.
    IndexSet,
    /// Partial Fisher–Yates over a scratch copy, swapping picks to the end.
    PartialShuffle,
    /// Full Fisher–Yates over a scratch copy, then truncate.
    FullShuffle,
}

impl Strategy {
    /// Strategy the automatic dispatch uses for `k` of `n` at the given threshold.
    ///
    /// The comparison `100·k / n <= threshold` is done exactly in integers.
    pub fn for_ratio(k: usize, n: usize, threshold_percent: u32) -> Self {
        if (k as u128) * 100 <= u128::from(threshold_percent) * (n as u128) {
            Strategy::IndexSet
        } else {
            Strategy::PartialShuffle
        }
    }
}

/// Draw `k` distinct elements from `population`.
///
/// Returns clones in no particular order. The population is left untouched.
/// Duplicate values in the population are distinct slots and may all appear.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidSampleSize`] if `k > population.len()`.
pub fn sample<T: Clone>(k: usize, population: &[T]) -> Result<Vec<T>> {
    let mut rng = rand::rng();
    sample_with_rng(k, population, &mut rng)
}

/// [`sample`] with a caller-supplied RNG.
pub fn sample_with_rng<T: Clone, R: Rng + ?Sized>(
    k: usize,
    population: &[T],
    rng: &mut R,
) -> Result<Vec<T>> {
    Sampler::new().sample_with_rng(k, population, rng)
}

/// Draw `k` distinct elements using a specific strategy.
///
/// Every strategy gives the same guarantees; only cost differs.
pub fn sample_with_strategy<T: Clone, R: Rng + ?Sized>(
    strategy: Strategy,
    k: usize,
    population: &[T],
    rng: &mut R,
) -> Result<Vec<T>> {
    validate(k, population.len())?;
    if k == 0 {
        return Ok(Vec::new());
    }
    Ok(match strategy {
        Strategy::IndexSet => index_set(k, population, rng),
        Strategy::PartialShuffle => partial_shuffle(k, population, rng),
        Strategy::FullShuffle => full_shuffle(k, population, rng),
    })
}

/// Configurable sampler.
///
/// ```
/// use chusen::{Sampler, Strategy};
///
/// let xs: Vec<u32> = (0..100).collect();
/// let picked = Sampler::new()
///     .with_seed(7)
///     .with_strategy(Strategy::PartialShuffle)
///     .sample(10, &xs)
///     .unwrap();
/// assert_eq!(picked.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    threshold_percent: u32,
    strategy: Option<Strategy>,
    seed: Option<u64>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    /// Automatic strategy, default threshold, thread-local RNG.
    pub fn new() -> Self {
        Self {
            threshold_percent: DEFAULT_DENSE_THRESHOLD_PERCENT,
            strategy: None,
            seed: None,
        }
    }

    /// Set the sample ratio (percent) at or below which the index set is used.
    pub fn with_threshold_percent(mut self, threshold_percent: u32) -> Self {
        self.threshold_percent = threshold_percent;
        self
    }

    /// Always use `strategy`, ignoring the threshold.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set random seed.
    ///
    /// Each call to [`Sampler::sample`] starts from a fresh generator with this
    /// seed, so identical inputs give identical samples.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Strategy a call with `k` of `n` would use.
    pub fn strategy_for(&self, k: usize, n: usize) -> Strategy {
        self.strategy
            .unwrap_or_else(|| Strategy::for_ratio(k, n, self.threshold_percent))
    }

    /// Draw `k` distinct elements from `population`.
    pub fn sample<T: Clone>(&self, k: usize, population: &[T]) -> Result<Vec<T>> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.sample_with_rng(k, population, &mut rng)
    }

    /// Draw `k` distinct elements using a caller-supplied RNG; the seed is ignored.
    pub fn sample_with_rng<T: Clone, R: Rng + ?Sized>(
        &self,
        k: usize,
        population: &[T],
        rng: &mut R,
    ) -> Result<Vec<T>> {
        let n = population.len();
        validate(k, n)?;
        let strategy = self.strategy_for(k, n);
        trace!(k, n, threshold = self.threshold_percent, ?strategy, "sample");
        sample_with_strategy(strategy, k, population, rng)
    }
}

fn validate(k: usize, n: usize) -> Result<()> {
    if k > n {
        debug!(k, n, "sample: rejected sample size");
        return Err(SelectionError::InvalidSampleSize {
            sample_size: k,
            population: n,
        });
    }
    Ok(())
}

/// Rejection-sample `k` distinct indices, then clone those slots.
///
/// Output follows the order in which indices were first accepted, so a seeded
/// RNG gives a reproducible sample.
fn index_set<T: Clone, R: Rng + ?Sized>(k: usize, population: &[T], rng: &mut R) -> Vec<T> {
    let n = population.len();
    let mut seen = HashSet::with_capacity(k);
    let mut out = Vec::with_capacity(k);
    while out.len() < k {
        let idx = rng.random_range(0..n);
        if seen.insert(idx) {
            out.push(population[idx].clone());
        }
    }
    out
}

/// Partial Fisher–Yates over a scratch copy.
///
/// Step `i` draws from the live range `[0, n - i)`, emits the pick, and swaps
/// it to position `n - i - 1` so it falls out of range.
fn partial_shuffle<T: Clone, R: Rng + ?Sized>(
    k: usize,
    population: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = population.len();
    let mut scratch = population.to_vec();
    let mut out = Vec::with_capacity(k);
    for i in 0..k {
        let last = n - i - 1;
        let r = rng.random_range(0..=last);
        out.push(scratch[r].clone());
        scratch.swap(r, last);
    }
    out
}

fn full_shuffle<T: Clone, R: Rng + ?Sized>(k: usize, population: &[T], rng: &mut R) -> Vec<T> {
    let mut scratch = population.to_vec();
    scratch.shuffle(rng);
    scratch.truncate(k);
    scratch
}
