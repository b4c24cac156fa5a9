//! Timeline generation and chronicle rendering

mod story;


pub use story::*;
