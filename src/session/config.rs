//! Session configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default number of primitive blank moves per shuffle.
pub const DEFAULT_SHUFFLE_STEPS: usize = 100;

/// Tunable knobs for a puzzle session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionConfig {
    /// Primitive blank moves performed per shuffle request. Larger values
    /// yield more thoroughly mixed boards.
    shuffle_steps: usize,
}

impl SessionConfig {
    /// Creates a configuration, clamping the shuffle step count to at
    /// least 1.
    pub fn new(shuffle_steps: usize) -> Self {
        if shuffle_steps == 0 {
            warn!("shuffle_steps of 0 clamped to 1");
        }
        Self {
            shuffle_steps: shuffle_steps.max(1),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_STEPS)
    }
}
