//! Presentation of a population: colors, ordering and gradients

mod color;
mod community;


pub use color::*;
pub use community::*;
