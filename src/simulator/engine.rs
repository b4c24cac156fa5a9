//! Main simulation engine

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::person::IdRegistry;
use crate::spectrum::Spectrum;
use crate::timeline::Timeline;
use rand::Rng;
use std::fmt;
use tracing::info;

/// Complete simulation result
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// One timeline per individual, in creation order
    pub stories: Vec<Timeline>,
    /// Final population view over every story's individual
    pub spectrum: Spectrum,
}

impl SimulationResult {
    /// Text report: each story's header and chronicle, then the gradient
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for story in &self.stories {
            let d = story.individual().describe();
            write!(
                f,
                "== {} ({}, {}) score {}",
                d.name, d.belief, d.color, d.moral_score
            )?;
            if let Some(ref parent) = d.parent_name {
                write!(f, ", child of {}", parent)?;
            }
            writeln!(f)?;

            for line in story.summarize() {
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }

        if let Some(gradient) = self.spectrum.gradient_css() {
            writeln!(f, "{}", gradient)?;
        }

        Ok(())
    }
}

/// Main simulation engine
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Validate the roster and wrap it
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every roster entry and its derivatives
    ///
    /// Each derivative spawns from its parent's state after the parent's
    /// own timeline has finished. Generated derivative ids never collide
    /// with any id named in the roster, so a seeded run is reproducible
    /// down to its ids.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationResult> {
        let steps = self.config.steps;
        let mut stories: Vec<Timeline> = Vec::with_capacity(self.config.people.len());
        let mut ids = IdRegistry::with_reserved(self.roster_ids());

        for person in &self.config.people {
            let parent = Timeline::generate(person.build()?, steps, rng);

            let children: Vec<Timeline> = person
                .derivatives
                .iter()
                .map(|derivative| {
                    let child = parent
                        .individual()
                        .spawn_derivative(derivative.overrides(), &mut ids, rng);
                    Timeline::generate(child, steps, rng)
                })
                .collect();

            stories.push(parent);
            stories.extend(children);
        }

        let spectrum = Spectrum::from_descriptions(
            stories.iter().map(|s| s.individual().describe()).collect(),
        );

        info!(
            individuals = stories.len(),
            steps,
            average = spectrum.average_score().unwrap_or_default(),
            "simulation complete"
        );

        Ok(SimulationResult { stories, spectrum })
    }

    /// Every id named explicitly in the roster
    fn roster_ids(&self) -> impl Iterator<Item = &str> {
        self.config.people.iter().flat_map(|person| {
            std::iter::once(person.id.as_str())
                .chain(person.derivatives.iter().filter_map(|d| d.id.as_deref()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::error::MoralSpectrumError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROSTER: &str = r#"{
        "steps": 12,
        "people": [
            {
                "id": "adam", "name": "Adam", "belief": "believer", "moral_score": 75,
                "derivatives": [
                    { "name": "Habil", "moral_score": 90 },
                    { "name": "Qabil", "belief": "wrongdoer", "moral_score": 25 }
                ]
            },
            { "id": "iblis", "name": "Iblis", "belief": "wrongdoer", "moral_score": 5 }
        ]
    }"#;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimulationConfig::from_json_str(ROSTER).unwrap()).unwrap()
    }

    #[test]
    fn test_simulate_story_order() {
        let result = engine().simulate(&mut StdRng::seed_from_u64(1)).unwrap();

        let names: Vec<&str> = result
            .stories
            .iter()
            .map(|s| s.individual().name())
            .collect();
        assert_eq!(names, ["Adam", "Habil", "Qabil", "Iblis"]);

        for story in &result.stories {
            assert_eq!(story.len(), 12);
        }
        assert_eq!(result.spectrum.len(), 4);
    }

    #[test]
    fn test_derivatives_link_to_parent() {
        let result = engine().simulate(&mut StdRng::seed_from_u64(2)).unwrap();
        let habil = result.stories[1].individual();
        let qabil = result.stories[2].individual();

        assert_eq!(habil.parent().map(|p| p.id.as_str()), Some("adam"));
        assert_eq!(qabil.describe().parent_name.as_deref(), Some("Adam"));
        assert_eq!(qabil.belief(), crate::person::BeliefCategory::Wrongdoer);
        assert!(result.stories[3].individual().parent().is_none());
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let engine = engine();
        let a = engine.simulate(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = engine.simulate(&mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(a.stories.len(), b.stories.len());
        for (x, y) in a.stories.iter().zip(&b.stories) {
            assert_eq!(x.individual().id(), y.individual().id());
            assert_eq!(x.records(), y.records());
            assert_eq!(x.individual().moral_score(), y.individual().moral_score());
        }
    }

    #[test]
    fn test_generated_ids_avoid_roster_ids() {
        let config = SimulationConfig::from_json_str(
            r#"{ "steps": 2, "people": [
                { "id": "a", "name": "A", "derivatives": [{}, {}] },
                { "id": "a-1", "name": "Taken" },
                { "id": "b", "name": "B", "derivatives": [{ "id": "b-1" }, {}] }
            ] }"#,
        )
        .unwrap();
        let result = SimulationEngine::new(config)
            .unwrap()
            .simulate(&mut StdRng::seed_from_u64(6))
            .unwrap();

        let ids: Vec<&str> = result
            .stories
            .iter()
            .map(|s| s.individual().id())
            .collect();
        assert_eq!(ids, ["a", "a-2", "a-3", "a-1", "b", "b-1", "b-2"]);
    }

    #[test]
    fn test_render_report() {
        let result = engine().simulate(&mut StdRng::seed_from_u64(4)).unwrap();
        let report = result.render();

        assert!(report.contains("== Adam (believer, hsl("));
        assert!(report.contains(", child of Adam"));
        assert!(report.contains("[Year 12] "));
        assert!(report.trim_end().ends_with(')'));
        assert!(report.contains("linear-gradient(to right, "));
        assert_eq!(report, result.to_string());
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = SimulationConfig::from_json_str(ROSTER).unwrap();
        config.people[1].moral_score = 101;
        assert!(matches!(
            SimulationEngine::new(config),
            Err(MoralSpectrumError::ScoreOutOfRange(101))
        ));
    }

    #[test]
    fn test_empty_roster() {
        let engine = SimulationEngine::new(
            SimulationConfig::from_json_str(r#"{ "people": [] }"#).unwrap(),
        )
        .unwrap();
        let result = engine.simulate(&mut StdRng::seed_from_u64(5)).unwrap();
        assert!(result.stories.is_empty());
        assert!(result.spectrum.is_empty());
        assert!(result.render().is_empty());
    }
}
