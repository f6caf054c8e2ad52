//! Errors for selection operations.
//!
//! Every variant is a precondition violation: it is detected before any
//! randomness is consumed and nothing is retried.

use thiserror::Error;

/// Result alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Errors returned when a caller supplies inputs outside an operation's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectionError {
    /// A uniform choice was requested from an empty population.
    #[error("cannot choose from an empty population")]
    EmptyPopulation,

    /// Weighted choice over no elements, or over elements whose weights sum to zero.
    #[error("weights must sum to a positive value (got {len} element(s) with zero total weight)")]
    InvalidWeights {
        /// Number of weighted elements supplied.
        len: usize,
    },

    /// Sample size exceeds the population size.
    #[error("sample size {sample_size} is larger than the population ({population})")]
    InvalidSampleSize {
        /// Requested number of elements.
        sample_size: usize,
        /// Number of elements available.
        population: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_sizes() {
        let err = SelectionError::InvalidSampleSize {
            sample_size: 6,
            population: 5,
        };
        assert_eq!(
            err.to_string(),
            "sample size 6 is larger than the population (5)"
        );

        let err = SelectionError::InvalidWeights { len: 3 };
        assert!(err.to_string().contains("3 element(s)"));
    }
}
