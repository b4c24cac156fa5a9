//! Event category selection

use super::EventCategory;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one event category uniformly at random
#[inline]
pub fn random_event<R: Rng + ?Sized>(rng: &mut R) -> EventCategory {
    // ALL is non-empty, so choose always yields a value
    *EventCategory::ALL
        .choose(rng)
        .unwrap_or(&EventCategory::Test)
}
