//! Positive-outcome probability for a reaction

use super::BeliefCategory;
use crate::event::EventCategory;

pub const BELIEVER_BONUS: f64 = 0.2;
pub const WRONGDOER_PENALTY: f64 = 0.2;
pub const TEMPTATION_PENALTY: f64 = 0.1;
/// Prosperity bonus for anyone who is not a wrongdoer
pub const PROSPERITY_BONUS: f64 = 0.05;
pub const PROSPERITY_WRONGDOER_PENALTY: f64 = 0.1;

/// Adjustment contributed by belief alone
#[inline]
pub fn belief_modifier(belief: BeliefCategory) -> f64 {
    match belief {
        BeliefCategory::Believer => BELIEVER_BONUS,
        BeliefCategory::Wrongdoer => -WRONGDOER_PENALTY,
        BeliefCategory::Mixed => 0.0,
    }
}

/// Adjustment contributed by the event, which for prosperity depends on belief
#[inline]
pub fn event_modifier(belief: BeliefCategory, event: EventCategory) -> f64 {
    match event {
        EventCategory::Temptation => -TEMPTATION_PENALTY,
        EventCategory::Prosperity if belief == BeliefCategory::Wrongdoer => {
            -PROSPERITY_WRONGDOER_PENALTY
        }
        EventCategory::Prosperity => PROSPERITY_BONUS,
        EventCategory::Poverty | EventCategory::Test => 0.0,
    }
}

/// Total additive modifier applied on top of the base chance
#[inline]
pub fn reaction_modifier(belief: BeliefCategory, event: EventCategory) -> f64 {
    belief_modifier(belief) + event_modifier(belief, event)
}

/// Probability in [0, 1] that a reaction comes out positive
#[inline]
pub fn positive_chance(moral_score: i32, belief: BeliefCategory, event: EventCategory) -> f64 {
    let base = moral_score as f64 / 100.0;
    (base + reaction_modifier(belief, event)).clamp(0.0, 1.0)
}
