//! Top-level simulation roster

use super::PersonConfig;
use crate::error::{MoralSpectrumError, Result};
use crate::person::{MAX_MORAL_SCORE, MIN_MORAL_SCORE};
use serde::Deserialize;
use std::collections::HashSet;

/// Default number of simulated years per timeline
pub const DEFAULT_STEPS: u32 = 15;

fn default_steps() -> u32 {
    DEFAULT_STEPS
}

/// Everything needed to run a simulation
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Years simulated for every individual
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Seed for a reproducible run; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    pub people: Vec<PersonConfig>,
}

impl SimulationConfig {
    /// Parse and validate a JSON roster
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check score ranges and id uniqueness across people and explicit derivative ids
    pub fn validate(&self) -> Result<()> {
        let mut ids: HashSet<&str> = HashSet::with_capacity(self.people.len());

        for person in &self.people {
            if !(MIN_MORAL_SCORE..=MAX_MORAL_SCORE).contains(&person.moral_score) {
                return Err(MoralSpectrumError::ScoreOutOfRange(person.moral_score));
            }
            if !ids.insert(&person.id) {
                return Err(MoralSpectrumError::DuplicateId(person.id.clone()));
            }

            for derivative in &person.derivatives {
                derivative.validate()?;
                if let Some(ref id) = derivative.id {
                    if !ids.insert(id) {
                        return Err(MoralSpectrumError::DuplicateId(id.clone()));
                    }
                }
            }
        }

        Ok(())
    }
}
