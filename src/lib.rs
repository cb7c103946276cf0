//! Secure random integer generation over a bounded range.
//!
//! # Purpose
//! Draws integers uniformly from an inclusive range `[min, max]` using a
//! cryptographically secure source, optionally retryable and
//! collision-free.
//!
//! # Project Context
//! Built for callers that need unpredictable, non-repeating identifiers
//! from a small range (ports, ticket numbers, test fixture ids) and want a
//! typed error instead of an endless loop when the range runs dry.
//!
//! # Not Provided
//! - Seeding control: sources are injected, never seeded here
//! - Ranges beyond `i64`
//! - Internal synchronization: one generator per caller
//!
//! # Example Usage
//! ```
//! use randomness::Generator;
//!
//! let mut ports = Generator::new(18_000, 50_000, 100, true).unwrap();
//! let picked = ports.must_generate_many(10);
//! assert_eq!(picked.len(), 10);
//! ```

pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod sink;

pub use crate::config::GeneratorConfig;
pub use crate::entropy::EntropySource;
pub use crate::error::{ConfigError, GenerationError};
pub use crate::generator::{Generator, MAX_SENTINEL_CEILING};
pub use crate::sink::{LogSink, NoopSink, RetrySink};
