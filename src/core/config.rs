//! Run configuration.
//!
//! Hosts build a `RunConfig` with the `with_*` setters or deserialize one
//! from any serde format. The library never reads configuration from the
//! environment or the filesystem on its own.

use serde::{Deserialize, Serialize};

/// Settings for a batch of generations driven by `Runner`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Maximum number of generations to advance.
    pub generations: u64,

    /// Stop at the first generation where the grid is stable
    /// (still life or period-2 oscillator).
    pub stop_when_stable: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            stop_when_stable: false,
        }
    }
}

impl RunConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation limit.
    #[must_use]
    pub fn with_generations(mut self, generations: u64) -> Self {
        self.generations = generations;
        self
    }

    /// Enable or disable the early stop on stability.
    #[must_use]
    pub fn with_stop_when_stable(mut self, enabled: bool) -> Self {
        self.stop_when_stable = enabled;
        self
    }
}
