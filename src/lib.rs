//! Moral Spectrum Core - generative narrative simulator of moral trajectories
//!
//! Individuals carry a moral score in [0, 100] and a belief category. Each
//! simulated year they react to a random life event; the outcome moves the
//! score and is rendered as a sentence. A population's final scores are laid
//! out as a colored spectrum.
//!
//! All randomness is passed in as a [`rand::Rng`], so any run can be made
//! reproducible with a seeded generator.

pub mod config;
pub mod error;
pub mod event;
pub mod person;
pub mod simulator;
pub mod spectrum;
pub mod timeline;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::simulator::{SimulationEngine, SimulationResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use crate::error::MoralSpectrumError;
pub use crate::event::{EventCategory, Outcome, ReactionRecord};
pub use crate::person::{BeliefCategory, Description, Individual, SpawnOverrides};
pub use crate::spectrum::{moral_color, Spectrum};
pub use crate::timeline::Timeline;

/// Parse a JSON roster and run it
///
/// Uses the roster's `seed` when present, otherwise seeds from entropy.
///
/// # Errors
/// Returns an error if the roster fails to parse or validate.
pub fn simulate_from_json(json: &str) -> Result<SimulationResult> {
    let config = SimulationConfig::from_json_str(json)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    SimulationEngine::new(config)?.simulate(&mut rng)
}
