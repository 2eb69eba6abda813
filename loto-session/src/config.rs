//! Scenario configuration.
//!
//! A scenario file describes a sequence of editions to run end to end:
//! how many tickets to print, what share to sell, and how the jackpot fund
//! is fed between editions.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root scenario structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Seed for the session's randomness stream; omitted means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Editions to run, in order.
    pub editions: Vec<EditionPlan>,
}

/// One edition of the scenario.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditionPlan {
    /// Tickets to print.
    pub tickets: usize,
    /// Share of tickets to sell, in percent.
    #[serde(default = "default_sell_percentage")]
    pub sell_percentage: f64,
    /// Flat top-up of the jackpot fund before this edition.
    #[serde(default)]
    pub jackpot_contribution: u64,
    /// Roll the previous play-through's leftover prize fund into the
    /// jackpot fund.
    #[serde(default)]
    pub carry_balance: bool,
    /// Rig the draw so a purchased ticket hits its half card on ball
    /// fifteen.
    #[serde(default)]
    pub simulate_jackpot: bool,
}

fn default_sell_percentage() -> f64 {
    100.0
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&contents)?)
    }

    /// Parse a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
