//! Bounded-range secure random integer generator.
//!
//! # Purpose
//! Draws integers uniformly from an inclusive range `[min, max]` using a
//! cryptographically secure source, optionally never repeating a value
//! ("collision-free" mode) and optionally capping how many collisions may
//! be re-drawn.
//!
//! # Modes
//! - **Plain**: no bookkeeping. Every call is one draw and cannot fail
//!   except on entropy failure.
//! - **Collision-free**: every produced value is recorded. A draw that hits
//!   a recorded value is re-drawn. Once every value has been produced,
//!   calls fail with [`GenerationError::RangeSaturated`].
//!
//! # Retry Budget
//! The budget is shared by all calls on one generator and is never
//! replenished. Each re-draw spends one unit. A collision seen with the
//! budget at zero fails with [`GenerationError::MaxRetryReached`]. A budget
//! of `0` at construction means unlimited.
//!
//! # Concurrency
//! No internal synchronization. Use one generator per caller, or wrap it in
//! a `Mutex`.

use std::collections::HashSet;

use rand::rngs::OsRng;

use crate::config::GeneratorConfig;
use crate::entropy::{os_source, EntropySource};
use crate::error::{ConfigError, GenerationError};
use crate::sink::{NoopSink, RetrySink};

/// Effective `max` when `max == 0` is passed at construction.
///
/// Kept at the 32-bit signed ceiling even though arithmetic is 64-bit.
pub const MAX_SENTINEL_CEILING: i64 = i32::MAX as i64;

/// Secure random integer generator over an inclusive range.
///
/// # Architecture
/// - `E`: the entropy source, [`OsRng`] unless injected
/// - `S`: the retry sink, [`NoopSink`] unless injected
/// - `seen` is `Some` if and only if collision-free mode is on; `None` is
///   the allocation-free fast path
///
/// # Example Usage
/// ```
/// use randomness::Generator;
///
/// let mut dice = Generator::new(1, 6, 0, false).unwrap();
/// let roll = dice.generate().unwrap();
/// assert!((1..=6).contains(&roll));
///
/// let mut tickets = Generator::new(1, 3, 0, true).unwrap();
/// let drawn = tickets.generate_many(3).unwrap();
/// assert!(tickets.generate().unwrap_err().is_range_saturated());
/// # assert_eq!(drawn.len(), 3);
/// ```
#[derive(Debug)]
pub struct Generator<E = OsRng, S = NoopSink> {
    min: i64,
    max: i64,
    collision_free: bool,
    retry_budget: Option<u32>,
    seen: Option<HashSet<i64>>,
    source: E,
    sink: S,
}

impl Generator {
    /// Creates a generator backed by the operating system CSPRNG.
    ///
    /// # Arguments
    /// * `min` - inclusive lower bound, at least 1
    /// * `max` - inclusive upper bound; `0` substitutes
    ///   [`MAX_SENTINEL_CEILING`]
    /// * `max_retry` - collision retry budget; `0` means unlimited
    /// * `collision_free` - never return the same value twice
    ///
    /// # Errors
    /// - [`ConfigError::InvalidMin`] if `min < 1`
    /// - [`ConfigError::InvalidMax`] if `max < 0`
    /// - [`ConfigError::MinExceedsMax`] if the effective `max` is below `min`
    ///
    /// # Edge Cases
    /// - `max == 0` with `min > MAX_SENTINEL_CEILING` fails with
    ///   `MinExceedsMax`, reporting the substituted ceiling
    /// - `min == max` is valid: a one-value range
    pub fn new(
        min: i64,
        max: i64,
        max_retry: u32,
        collision_free: bool,
    ) -> Result<Self, ConfigError> {
        Self::with_parts(min, max, max_retry, collision_free, os_source(), NoopSink)
    }

    /// Creates a generator from declarative settings.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.min,
            config.max,
            config.max_retry,
            config.collision_free,
        )
    }
}

impl<E: EntropySource, S: RetrySink> Generator<E, S> {
    /// Creates a generator with an explicit entropy source and sink.
    ///
    /// Same validation as [`Generator::new`].
    pub fn with_parts(
        min: i64,
        max: i64,
        max_retry: u32,
        collision_free: bool,
        source: E,
        sink: S,
    ) -> Result<Self, ConfigError> {
        if min < 1 {
            return Err(ConfigError::InvalidMin { min });
        }

        if max < 0 {
            return Err(ConfigError::InvalidMax { max });
        }

        let max = if max == 0 { MAX_SENTINEL_CEILING } else { max };

        if max < min {
            return Err(ConfigError::MinExceedsMax { min, max });
        }

        Ok(Self {
            min,
            max,
            collision_free,
            retry_budget: (max_retry > 0).then_some(max_retry),
            seen: collision_free.then(HashSet::new),
            source,
            sink,
        })
    }

    /// Draws one value from `[min, max]`.
    ///
    /// # Algorithm
    /// 1. Draw `min + below(max - min + 1)` from the secure source
    /// 2. Plain mode: return it
    /// 3. If the recorded set already holds more than `max - min` values,
    ///    fail with `RangeSaturated`
    /// 4. On a collision, spend one unit of budget (or fail if none is
    ///    left) and go back to 1
    /// 5. Record the value and return it
    ///
    /// The saturation check runs after the draw, against `max - min`
    /// rather than the span. Both are observable and kept as-is.
    ///
    /// # Liveness
    /// With unlimited retries and one free slot left in a large range, the
    /// loop may run many iterations. It terminates with probability 1.
    ///
    /// # Errors
    /// - [`GenerationError::RangeSaturated`]
    /// - [`GenerationError::MaxRetryReached`]
    /// - [`GenerationError::RandomSource`]
    pub fn generate(&mut self) -> Result<i64, GenerationError> {
        // Cannot overflow: 1 <= min <= max <= i64::MAX.
        let span = (self.max - self.min + 1) as u64;

        loop {
            let value = self.min + self.source.below(span)? as i64;

            let Some(seen) = self.seen.as_mut() else {
                return Ok(value);
            };

            if seen.len() as i64 > self.max - self.min {
                return Err(GenerationError::RangeSaturated {
                    min: self.min,
                    max: self.max,
                });
            }

            if seen.insert(value) {
                return Ok(value);
            }

            if let Some(budget) = self.retry_budget.as_mut() {
                if *budget == 0 {
                    return Err(GenerationError::MaxRetryReached);
                }
                self.sink.retrying(Some(*budget));
                *budget -= 1;
            } else {
                self.sink.retrying(None);
            }
        }
    }

    /// Like [`generate`](Self::generate), but panics on any error.
    ///
    /// For callers with no recovery path.
    pub fn must_generate(&mut self) -> i64 {
        self.generate().unwrap_or_else(|err| panic!("randomness: {err}"))
    }

    /// Draws `n` values in sequence.
    ///
    /// Stops at the first error and returns it; values drawn before the
    /// failure are discarded. `n == 0` returns an empty vector without
    /// touching the entropy source.
    pub fn generate_many(&mut self, n: usize) -> Result<Vec<i64>, GenerationError> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.generate()?);
        }
        Ok(values)
    }

    /// Like [`generate_many`](Self::generate_many), but panics on the first
    /// error.
    pub fn must_generate_many(&mut self, n: usize) -> Vec<i64> {
        self.generate_many(n).unwrap_or_else(|err| panic!("randomness: {err}"))
    }
}

impl<E, S> Generator<E, S> {
    /// Inclusive lower bound.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Effective inclusive upper bound, after zero substitution.
    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_collision_free(&self) -> bool {
        self.collision_free
    }

    /// Remaining retry budget, or `None` when retries are unlimited.
    pub fn remaining_retries(&self) -> Option<u32> {
        self.retry_budget
    }

    /// Number of distinct values produced so far. Always 0 outside
    /// collision-free mode.
    pub fn produced(&self) -> usize {
        self.seen.as_ref().map_or(0, HashSet::len)
    }

    /// Swaps the entropy source, keeping range, budget and recorded values.
    pub fn with_source<E2>(self, source: E2) -> Generator<E2, S> {
        Generator {
            min: self.min,
            max: self.max,
            collision_free: self.collision_free,
            retry_budget: self.retry_budget,
            seen: self.seen,
            source,
            sink: self.sink,
        }
    }

    /// Swaps the retry sink, keeping everything else.
    pub fn with_sink<S2>(self, sink: S2) -> Generator<E, S2> {
        Generator {
            min: self.min,
            max: self.max,
            collision_free: self.collision_free,
            retry_budget: self.retry_budget,
            seen: self.seen,
            source: self.source,
            sink,
        }
    }
}

// ============================================================================
// TESTING
// ============================================================================
