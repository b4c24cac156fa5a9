//! Belief categories

use crate::error::{MoralSpectrumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score above which a derivative is classified as a believer
pub const BELIEVER_THRESHOLD: i32 = 70;
/// Score below which a derivative is classified as a wrongdoer
pub const WRONGDOER_THRESHOLD: i32 = 30;

/// Coarse classification modulating reaction probabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeliefCategory {
    Believer,
    Wrongdoer,
    #[default]
    Mixed,
}

impl BeliefCategory {
    /// Classify a freshly spawned score: >70 believer, <30 wrongdoer
    #[inline]
    pub fn from_score(score: i32) -> Self {
        if score > BELIEVER_THRESHOLD {
            BeliefCategory::Believer
        } else if score < WRONGDOER_THRESHOLD {
            BeliefCategory::Wrongdoer
        } else {
            BeliefCategory::Mixed
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            BeliefCategory::Believer => "believer",
            BeliefCategory::Wrongdoer => "wrongdoer",
            BeliefCategory::Mixed => "mixed",
        }
    }
}

impl fmt::Display for BeliefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeliefCategory {
    type Err = MoralSpectrumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "believer" => Ok(BeliefCategory::Believer),
            "wrongdoer" => Ok(BeliefCategory::Wrongdoer),
            "mixed" => Ok(BeliefCategory::Mixed),
            _ => Err(MoralSpectrumError::UnknownBelief(s.to_string())),
        }
    }
}
