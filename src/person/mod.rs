//! Individuals: belief, reaction chance and moral state

mod belief;
pub mod chance;
mod ids;
mod individual;


pub use belief::*;
pub use chance::{positive_chance, reaction_modifier};
pub use ids::*;
pub use individual::*;
