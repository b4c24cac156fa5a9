//! Configuration module for simulation rosters
//!
//! This module handles deserialization and validation of rosters from JSON.

mod person;
mod simulation;

pub use person::*;
pub use simulation::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoralSpectrumError;
    use crate::person::BeliefCategory;

    const ROSTER: &str = r#"{
        "steps": 10,
        "seed": 7,
        "people": [
            {
                "id": "adam",
                "name": "Adam",
                "belief": "believer",
                "behaviour": "repentant",
                "moral_score": 80,
                "derivatives": [
                    { "name": "Habil", "belief": "believer", "moral_score": 85 },
                    { "id": "qabil", "name": "Qabil", "belief": "wrongdoer" }
                ]
            },
            { "id": "stranger", "name": "Stranger" }
        ]
    }"#;

    #[test]
    fn test_parse_roster() {
        let config = SimulationConfig::from_json_str(ROSTER).unwrap();

        assert_eq!(config.steps, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.people.len(), 2);

        let adam = &config.people[0];
        assert_eq!(adam.belief, BeliefCategory::Believer);
        assert_eq!(adam.derivatives.len(), 2);
        assert_eq!(adam.derivatives[0].moral_score, Some(85));
        assert_eq!(adam.derivatives[1].id.as_deref(), Some("qabil"));
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            SimulationConfig::from_json_str(r#"{ "people": [{ "id": "a", "name": "A" }] }"#)
                .unwrap();

        assert_eq!(config.steps, DEFAULT_STEPS);
        assert_eq!(config.seed, None);
        let person = &config.people[0];
        assert_eq!(person.belief, BeliefCategory::Mixed);
        assert_eq!(person.moral_score, 50);
        assert!(person.behaviour.is_empty());
        assert!(person.derivatives.is_empty());
    }

    #[test]
    fn test_build_individual() {
        let config = SimulationConfig::from_json_str(ROSTER).unwrap();
        let adam = config.people[0].build().unwrap();
        assert_eq!(adam.id(), "adam");
        assert_eq!(adam.behaviour(), "repentant");
        assert_eq!(adam.moral_score(), 80);
    }

    #[test]
    fn test_unknown_belief_rejected() {
        let err = SimulationConfig::from_json_str(
            r#"{ "people": [{ "id": "a", "name": "A", "belief": "saint" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MoralSpectrumError::DeserializationError(_)));
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let err = SimulationConfig::from_json_str(
            r#"{ "people": [{ "id": "a", "name": "A", "moral_score": 120 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MoralSpectrumError::ScoreOutOfRange(120)));

        let err = SimulationConfig::from_json_str(
            r#"{ "people": [{ "id": "a", "name": "A",
                 "derivatives": [{ "moral_score": -5 }] }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MoralSpectrumError::ScoreOutOfRange(-5)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = SimulationConfig::from_json_str(
            r#"{ "people": [
                { "id": "a", "name": "A", "derivatives": [{ "id": "b" }] },
                { "id": "b", "name": "B" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MoralSpectrumError::DuplicateId(ref id) if id == "b"));
    }

    #[test]
    fn test_derivative_overrides() {
        let config = SimulationConfig::from_json_str(ROSTER).unwrap();
        let overrides = config.people[0].derivatives[1].overrides();
        assert_eq!(overrides.id.as_deref(), Some("qabil"));
        assert_eq!(overrides.belief, Some(BeliefCategory::Wrongdoer));
        assert_eq!(overrides.moral_score, None);
    }
}
