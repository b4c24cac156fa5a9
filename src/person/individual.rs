//! Individual model: moral state, reactions and derivatives

use super::chance::positive_chance;
use super::IdRegistry;
use super::BeliefCategory;
use crate::error::{MoralSpectrumError, Result};
use crate::event::{narrate, EventCategory, Outcome, ReactionRecord};
use crate::spectrum::moral_color;
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

pub const MIN_MORAL_SCORE: i32 = 0;
pub const MAX_MORAL_SCORE: i32 = 100;
pub const DEFAULT_MORAL_SCORE: i32 = 50;

/// Score change after a positive reaction
pub const POSITIVE_DELTA: RangeInclusive<i32> = 0..=3;
/// Score change after a negative reaction
pub const NEGATIVE_DELTA: RangeInclusive<i32> = -4..=0;
/// Maximum distance a derivative's starting score drifts from its parent
pub const DERIVATIVE_DRIFT: i32 = 30;

pub const BEHAVIOUR_MOSTLY_GOOD: &str = "mostly_good";
pub const BEHAVIOUR_MOSTLY_BAD: &str = "mostly_bad";

/// Force a score into [0, 100]
#[inline]
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_MORAL_SCORE, MAX_MORAL_SCORE)
}

/// Coarse behaviour bucket for a spawned score
#[inline]
pub fn behaviour_bucket(score: i32) -> &'static str {
    if score >= DEFAULT_MORAL_SCORE {
        BEHAVIOUR_MOSTLY_GOOD
    } else {
        BEHAVIOUR_MOSTLY_BAD
    }
}

/// Read-only lineage snapshot of the individual a derivative came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentLink {
    pub id: String,
    pub name: String,
}

/// Field replacements applied to a derivative after its defaults are computed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub belief: Option<BeliefCategory>,
    pub behaviour: Option<String>,
    /// Clamped into [0, 100] when applied
    pub moral_score: Option<i32>,
}

impl SpawnOverrides {
    fn apply(self, individual: &mut Individual) {
        if let Some(id) = self.id {
            individual.id = id;
        }
        if let Some(name) = self.name {
            individual.name = name;
        }
        if let Some(belief) = self.belief {
            individual.belief = belief;
        }
        if let Some(behaviour) = self.behaviour {
            individual.behaviour = behaviour;
        }
        if let Some(score) = self.moral_score {
            individual.moral_score = clamp_score(score);
        }
    }
}

/// Projection of an individual's current state for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub id: String,
    pub name: String,
    pub belief: BeliefCategory,
    pub behaviour: String,
    pub moral_score: i32,
    pub color: String,
    pub parent_name: Option<String>,
}

/// A simulated person with a moral score in [0, 100]
///
/// The score only changes through [`Individual::react`]. History is not kept
/// here; a [`Timeline`](crate::timeline::Timeline) owns the record log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    id: String,
    name: String,
    belief: BeliefCategory,
    behaviour: String,
    moral_score: i32,
    parent: Option<ParentLink>,
}

impl Individual {
    /// Create an individual, rejecting a score outside [0, 100]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        belief: BeliefCategory,
        moral_score: i32,
    ) -> Result<Self> {
        if !(MIN_MORAL_SCORE..=MAX_MORAL_SCORE).contains(&moral_score) {
            return Err(MoralSpectrumError::ScoreOutOfRange(moral_score));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            belief,
            behaviour: String::new(),
            moral_score,
            parent: None,
        })
    }

    /// Create a mixed-belief individual at the default score of 50
    pub fn with_defaults(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            belief: BeliefCategory::default(),
            behaviour: String::new(),
            moral_score: DEFAULT_MORAL_SCORE,
            parent: None,
        }
    }

    /// Set the descriptive behaviour label
    pub fn with_behaviour(mut self, behaviour: impl Into<String>) -> Self {
        self.behaviour = behaviour.into();
        self
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn belief(&self) -> BeliefCategory {
        self.belief
    }

    #[inline]
    pub fn behaviour(&self) -> &str {
        &self.behaviour
    }

    #[inline]
    pub fn moral_score(&self) -> i32 {
        self.moral_score
    }

    #[inline]
    pub fn parent(&self) -> Option<&ParentLink> {
        self.parent.as_ref()
    }

    /// React to an event at the given time step
    ///
    /// Draws the outcome against [`positive_chance`], moves the score by a
    /// random delta in the outcome's range and returns the rendered record.
    pub fn react<R: Rng + ?Sized>(
        &mut self,
        event: EventCategory,
        time_step: u32,
        rng: &mut R,
    ) -> ReactionRecord {
        let chance = positive_chance(self.moral_score, self.belief, event);
        let outcome = if rng.gen::<f64>() < chance {
            Outcome::Positive
        } else {
            Outcome::Negative
        };

        let delta = match outcome {
            Outcome::Positive => rng.gen_range(POSITIVE_DELTA),
            Outcome::Negative => rng.gen_range(NEGATIVE_DELTA),
        };
        self.moral_score = clamp_score(self.moral_score + delta);

        debug!(
            id = %self.id,
            %event,
            %outcome,
            delta,
            score = self.moral_score,
            "reaction"
        );

        ReactionRecord {
            event,
            outcome,
            text: narrate(event, outcome, &self.name),
            time_step,
            intensity: delta.unsigned_abs().max(1),
        }
    }

    /// Spawn a descendant whose starting score drifts up to ±30 from this one
    ///
    /// Belief and behaviour are derived from the drifted score, then
    /// `overrides` replace any field they carry. Without an id override the
    /// id is allocated from `ids`; an override id is reserved there too.
    pub fn spawn_derivative<R: Rng + ?Sized>(
        &self,
        mut overrides: SpawnOverrides,
        ids: &mut IdRegistry,
        rng: &mut R,
    ) -> Individual {
        let drift = rng.gen_range(-DERIVATIVE_DRIFT..=DERIVATIVE_DRIFT);
        let score = clamp_score(self.moral_score + drift);

        let id = match overrides.id.take() {
            Some(id) => {
                ids.reserve(id.as_str());
                id
            }
            None => ids.allocate(&self.id),
        };

        let mut child = Individual {
            id,
            name: format!("Child of {}", self.name),
            belief: BeliefCategory::from_score(score),
            behaviour: behaviour_bucket(score).to_string(),
            moral_score: score,
            parent: Some(ParentLink {
                id: self.id.clone(),
                name: self.name.clone(),
            }),
        };
        overrides.apply(&mut child);

        debug!(
            parent = %self.id,
            id = %child.id,
            drift,
            score = child.moral_score,
            belief = %child.belief,
            "spawned derivative"
        );

        child
    }

    /// Snapshot of current state, including the score's display color
    pub fn describe(&self) -> Description {
        Description {
            id: self.id.clone(),
            name: self.name.clone(),
            belief: self.belief,
            behaviour: self.behaviour.clone(),
            moral_score: self.moral_score,
            color: moral_color(self.moral_score),
            parent_name: self.parent.as_ref().map(|p| p.name.clone()),
        }
    }
}
