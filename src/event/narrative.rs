//! Narrative template table: (event, outcome) -> sentence

use super::{EventCategory, Outcome};

/// Sentence used for any label outside the known categories
pub const UNDEFINED_EVENT_TEMPLATE: &str = "{name} experienced an undefined event.";

/// Look up the template for an event category and outcome
#[inline]
pub fn template(event: EventCategory, outcome: Outcome) -> &'static str {
    match (event, outcome) {
        (EventCategory::Prosperity, Outcome::Positive) => {
            "{name} received wealth and success, and responded with gratitude and generosity."
        }
        (EventCategory::Prosperity, Outcome::Negative) => {
            "{name} received wealth and success, but became arrogant and hurtful."
        }
        (EventCategory::Poverty, Outcome::Positive) => {
            "{name} faced poverty with patience and trust."
        }
        (EventCategory::Poverty, Outcome::Negative) => {
            "{name} faced poverty with anger and oppression toward others."
        }
        (EventCategory::Temptation, Outcome::Positive) => {
            "{name} was tempted by forbidden pleasures but resisted."
        }
        (EventCategory::Temptation, Outcome::Negative) => {
            "{name} fell into forbidden pleasures and normalized them."
        }
        (EventCategory::Test, Outcome::Positive) => {
            "{name} went through a hard trial and grew closer to God and people."
        }
        (EventCategory::Test, Outcome::Negative) => {
            "{name} went through a hard trial and responded with injustice and resentment."
        }
    }
}

/// Render the narrative sentence for a reaction
#[inline]
pub fn narrate(event: EventCategory, outcome: Outcome, name: &str) -> String {
    template(event, outcome).replace("{name}", name)
}

/// Render a sentence from a free-text event label
///
/// Labels that do not parse as an [`EventCategory`] fall back to the
/// undefined-event sentence instead of failing.
pub fn narrate_label(label: &str, outcome: Outcome, name: &str) -> String {
    match label.parse::<EventCategory>() {
        Ok(event) => narrate(event, outcome, name),
        Err(_) => UNDEFINED_EVENT_TEMPLATE.replace("{name}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prosperity_sentences() {
        assert_eq!(
            narrate(EventCategory::Prosperity, Outcome::Positive, "Adam"),
            "Adam received wealth and success, and responded with gratitude and generosity."
        );
        assert_eq!(
            narrate(EventCategory::Prosperity, Outcome::Negative, "Adam"),
            "Adam received wealth and success, but became arrogant and hurtful."
        );
    }

    #[test]
    fn test_poverty_sentences() {
        assert_eq!(
            narrate(EventCategory::Poverty, Outcome::Positive, "Hawa"),
            "Hawa faced poverty with patience and trust."
        );
        assert_eq!(
            narrate(EventCategory::Poverty, Outcome::Negative, "Hawa"),
            "Hawa faced poverty with anger and oppression toward others."
        );
    }

    #[test]
    fn test_temptation_sentences() {
        assert_eq!(
            narrate(EventCategory::Temptation, Outcome::Positive, "Qabil"),
            "Qabil was tempted by forbidden pleasures but resisted."
        );
        assert_eq!(
            narrate(EventCategory::Temptation, Outcome::Negative, "Qabil"),
            "Qabil fell into forbidden pleasures and normalized them."
        );
    }

    #[test]
    fn test_trial_sentences() {
        assert_eq!(
            narrate(EventCategory::Test, Outcome::Positive, "Habil"),
            "Habil went through a hard trial and grew closer to God and people."
        );
        assert_eq!(
            narrate(EventCategory::Test, Outcome::Negative, "Habil"),
            "Habil went through a hard trial and responded with injustice and resentment."
        );
    }

    #[test]
    fn test_every_template_names_the_individual() {
        for event in EventCategory::ALL {
            for outcome in [Outcome::Positive, Outcome::Negative] {
                assert!(template(event, outcome).starts_with("{name} "));
            }
        }
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(
            narrate_label("earthquake", Outcome::Positive, "Adam"),
            "Adam experienced an undefined event."
        );
        assert_eq!(
            narrate_label("poverty", Outcome::Positive, "Adam"),
            "Adam faced poverty with patience and trust."
        );
    }
}
