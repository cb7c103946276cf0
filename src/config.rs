//! Declarative generator settings.
//!
//! Lets a generator be described in a config file (TOML, JSON, ...) and
//! built later. Validation happens at build time, not at parse time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::Generator;

/// Settings for a [`Generator`].
///
/// Every field has a default, so partial documents deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Inclusive lower bound. Must be at least 1.
    pub min: i64,
    /// Inclusive upper bound. `0` means the 32-bit signed ceiling.
    pub max: i64,
    /// Collision retry budget. `0` means unlimited, not "no retries".
    pub max_retry: u32,
    /// Never return the same value twice.
    pub collision_free: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 0,
            max_retry: 0,
            collision_free: false,
        }
    }
}

impl GeneratorConfig {
    /// Validates the settings and builds an OS-backed generator.
    pub fn build(&self) -> Result<Generator, ConfigError> {
        Generator::from_config(self)
    }
}
