// Configuration type definitions

use serde::Deserialize;

use crate::progress::types::{default_steps, StepSpec};
use crate::suggestion::service::DEFAULT_DELAY_MS;

/// Suggestion configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionConfig {
    /// Simulated generation delay in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

/// Simulation configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Steps for the transparent-loading run
    #[serde(default = "default_steps")]
    pub steps: Vec<StepSpec>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            steps: default_steps(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestion: SuggestionConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}
