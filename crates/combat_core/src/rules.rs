use serde::{Deserialize, Serialize};

pub const DEFAULT_DEATH_PENALTY: u32 = 50;
pub const DEFAULT_RUN_THRESHOLD: f64 = 0.25;

/// Tunable constants of the combat rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Credits taken on every death, even into debt.
    pub death_penalty: u32,
    /// HP ratio that must be strictly exceeded to flee.
    pub run_threshold: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            death_penalty: DEFAULT_DEATH_PENALTY,
            run_threshold: DEFAULT_RUN_THRESHOLD,
        }
    }
}
