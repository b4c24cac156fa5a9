//! Timeline: drives one individual through simulated years

use crate::event::{random_event, ReactionRecord};
use crate::person::Individual;
use rand::Rng;
use tracing::info;

/// One individual plus the authoritative, append-only log of its reactions
#[derive(Debug, Clone)]
pub struct Timeline {
    individual: Individual,
    records: Vec<ReactionRecord>,
}

impl Timeline {
    /// Start an empty timeline for an individual
    pub fn new(individual: Individual) -> Self {
        Self {
            individual,
            records: Vec::new(),
        }
    }

    /// Run `step_count` years, one random event each, numbered from 1
    pub fn generate<R: Rng + ?Sized>(individual: Individual, step_count: u32, rng: &mut R) -> Self {
        let mut timeline = Self {
            individual,
            records: Vec::with_capacity(step_count as usize),
        };

        for _ in 0..step_count {
            timeline.advance(rng);
        }

        info!(
            id = %timeline.individual.id(),
            steps = step_count,
            score = timeline.individual.moral_score(),
            "timeline generated"
        );

        timeline
    }

    /// Run one more year and return its record
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ReactionRecord {
        let time_step = self.next_time_step();
        let event = random_event(rng);
        let record = self.individual.react(event, time_step, rng);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    #[inline]
    fn next_time_step(&self) -> u32 {
        self.records.last().map_or(1, |r| r.time_step + 1)
    }

    #[inline]
    pub fn individual(&self) -> &Individual {
        &self.individual
    }

    #[inline]
    pub fn records(&self) -> &[ReactionRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand back the individual, dropping the log
    pub fn into_individual(self) -> Individual {
        self.individual
    }

    /// One chronicle line per record, oldest first
    pub fn summarize(&self) -> Vec<String> {
        self.records.iter().map(ReactionRecord::summary_line).collect()
    }
}
