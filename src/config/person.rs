//! Roster entries for individuals and their derivatives

use crate::error::{MoralSpectrumError, Result};
use crate::person::{
    BeliefCategory, Individual, SpawnOverrides, DEFAULT_MORAL_SCORE, MAX_MORAL_SCORE,
    MIN_MORAL_SCORE,
};
use serde::Deserialize;

fn default_moral_score() -> i32 {
    DEFAULT_MORAL_SCORE
}

/// A root individual in the roster
#[derive(Debug, Clone, Deserialize)]
pub struct PersonConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub belief: BeliefCategory,
    #[serde(default)]
    pub behaviour: String,
    #[serde(default = "default_moral_score")]
    pub moral_score: i32,
    /// Descendants spawned from this individual once its timeline ends
    #[serde(default)]
    pub derivatives: Vec<DerivativeConfig>,
}

impl PersonConfig {
    /// Build the individual this entry describes
    pub fn build(&self) -> Result<Individual> {
        Individual::new(&self.id, &self.name, self.belief, self.moral_score)
            .map(|i| i.with_behaviour(&self.behaviour))
    }
}

/// Override set for one derivative; absent fields keep the drifted defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DerivativeConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub belief: Option<BeliefCategory>,
    pub behaviour: Option<String>,
    pub moral_score: Option<i32>,
}

impl DerivativeConfig {
    /// Reject an explicit score outside [0, 100]
    pub fn validate(&self) -> Result<()> {
        match self.moral_score {
            Some(score) if !(MIN_MORAL_SCORE..=MAX_MORAL_SCORE).contains(&score) => {
                Err(MoralSpectrumError::ScoreOutOfRange(score))
            }
            _ => Ok(()),
        }
    }

    pub fn overrides(&self) -> SpawnOverrides {
        SpawnOverrides {
            id: self.id.clone(),
            name: self.name.clone(),
            belief: self.belief,
            behaviour: self.behaviour.clone(),
            moral_score: self.moral_score,
        }
    }
}
