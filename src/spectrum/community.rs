//! Population spectrum: sorted, positioned and rendered as a gradient

use crate::person::Description;
use serde::Serialize;

/// One individual's place on the spectrum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumEntry {
    pub description: Description,
    /// Normalized position in [0, 1]
    pub position: f64,
}

/// A population ordered by ascending moral score
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Spectrum {
    entries: Vec<SpectrumEntry>,
}

impl Spectrum {
    /// Sort ascending by score and assign evenly spaced positions
    ///
    /// The sort is stable, so equal scores keep their input order. A single
    /// entry sits at position 0.
    pub fn from_descriptions(mut descriptions: Vec<Description>) -> Self {
        descriptions.sort_by_key(|d| d.moral_score);

        let last = descriptions.len().saturating_sub(1);
        let entries = descriptions
            .into_iter()
            .enumerate()
            .map(|(i, description)| SpectrumEntry {
                position: if last == 0 { 0.0 } else { i as f64 / last as f64 },
                description,
            })
            .collect();

        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[SpectrumEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean moral score of the population, if any
    pub fn average_score(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: i64 = self
            .entries
            .iter()
            .map(|e| e.description.moral_score as i64)
            .sum();
        Some(total as f64 / self.entries.len() as f64)
    }

    /// `color pct%` stops in ascending order
    pub fn gradient_stops(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{} {:.1}%", e.description.color, e.position * 100.0))
            .collect()
    }

    /// CSS `linear-gradient` across the population, `None` when empty
    pub fn gradient_css(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(format!(
            "linear-gradient(to right, {})",
            self.gradient_stops().join(", ")
        ))
    }
}
