//! Event categories, narrative rendering and random selection

mod category;
pub mod narrative;
pub mod selector;


pub use category::*;
pub use narrative::{narrate, narrate_label, UNDEFINED_EVENT_TEMPLATE};
pub use selector::*;
