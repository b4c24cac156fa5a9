//! Event categories, reaction outcomes and the per-step reaction record

use crate::error::{MoralSpectrumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of life circumstance an individual reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Prosperity,
    Poverty,
    Temptation,
    Test,
}

impl EventCategory {
    /// Every category, in table order. Random selection draws from this.
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Prosperity,
        EventCategory::Poverty,
        EventCategory::Temptation,
        EventCategory::Test,
    ];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Prosperity => "prosperity",
            EventCategory::Poverty => "poverty",
            EventCategory::Temptation => "temptation",
            EventCategory::Test => "test",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = MoralSpectrumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prosperity" => Ok(EventCategory::Prosperity),
            "poverty" => Ok(EventCategory::Poverty),
            "temptation" => Ok(EventCategory::Temptation),
            "test" => Ok(EventCategory::Test),
            _ => Err(MoralSpectrumError::UnknownEvent(s.to_string())),
        }
    }
}

/// Valence of a single reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Negative,
}

impl Outcome {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Positive => "positive",
            Outcome::Negative => "negative",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = MoralSpectrumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Outcome::Positive),
            "negative" => Ok(Outcome::Negative),
            _ => Err(MoralSpectrumError::UnknownOutcome(s.to_string())),
        }
    }
}

/// Immutable record of one reaction at one time step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionRecord {
    pub event: EventCategory,
    pub outcome: Outcome,
    /// Rendered narrative sentence
    pub text: String,
    /// Simulated year, starting at 1
    pub time_step: u32,
    /// Magnitude of the moral score change, at least 1
    pub intensity: u32,
}

impl ReactionRecord {
    /// Format as a chronicle line: `[Year N] (event / outcome) text`
    pub fn summary_line(&self) -> String {
        format!(
            "[Year {}] ({} / {}) {}",
            self.time_step, self.event, self.outcome, self.text
        )
    }
}
