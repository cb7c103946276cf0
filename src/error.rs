//! Error types for generator construction and value generation.
//!
//! # Design Note
//! Construction and generation fail for unrelated reasons, so they get
//! separate enums. A `ConfigError` means no generator exists at all; a
//! `GenerationError` leaves the generator usable.

use thiserror::Error;

/// Errors returned while validating a generator's range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min` was below 1.
    #[error("invalid param: min must be at least 1, got {min}")]
    InvalidMin { min: i64 },

    /// `max` was negative. Zero is allowed and means "unbounded".
    #[error("invalid param: max can't be negative, got {max}")]
    InvalidMax { max: i64 },

    /// The effective `max` (after zero substitution) is below `min`.
    #[error("invalid param: min ({min}) can't be bigger than max ({max})")]
    MinExceedsMax { min: i64, max: i64 },
}

/// Errors returned by [`Generator::generate`](crate::Generator::generate).
///
/// None of these put the generator into a terminal state. A later call
/// may still succeed.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Collision-free mode has already produced every value in `[min, max]`.
    #[error("failed to generate, range saturated ([{min}, {max}])")]
    RangeSaturated { min: i64, max: i64 },

    /// A collision happened after the retry budget reached zero.
    #[error("failed to generate, reached max retry")]
    MaxRetryReached,

    /// The secure entropy source failed. Propagated verbatim, never retried.
    #[error("failed to generate random int")]
    RandomSource(#[from] rand::Error),
}

impl GenerationError {
    /// True for [`GenerationError::RangeSaturated`].
    pub fn is_range_saturated(&self) -> bool {
        matches!(self, Self::RangeSaturated { .. })
    }

    /// True for [`GenerationError::MaxRetryReached`].
    pub fn is_max_retry_reached(&self) -> bool {
        matches!(self, Self::MaxRetryReached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_messages_carry_values() {
        let err = ConfigError::MinExceedsMax { min: 10, max: 5 };
        assert_eq!(
            err.to_string(),
            "invalid param: min (10) can't be bigger than max (5)"
        );
        assert!(ConfigError::InvalidMin { min: 0 }.to_string().contains("got 0"));
        assert!(ConfigError::InvalidMax { max: -3 }
            .to_string()
            .contains("got -3"));
    }

    #[test]
    fn test_generation_error_predicates() {
        let saturated = GenerationError::RangeSaturated { min: 1, max: 3 };
        assert!(saturated.is_range_saturated());
        assert!(!saturated.is_max_retry_reached());

        let retry = GenerationError::MaxRetryReached;
        assert!(retry.is_max_retry_reached());
        assert!(!retry.is_range_saturated());
    }

    #[test]
    fn test_random_source_keeps_underlying_error() {
        let inner = rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy pool offline",
        ));
        let err = GenerationError::from(inner);

        assert!(!err.is_range_saturated());
        let source = err.source().expect("source must be attached");
        assert!(source.to_string().contains("entropy pool offline"));
    }
}
