//! Identifier allocation for derivatives

use std::collections::{HashMap, HashSet};

/// Ids in use within one run, plus the next suffix to try per parent
///
/// Derivative ids take the form `"<parent id>-<n>"`; a suffix already
/// taken by any registered id is skipped.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    used: HashSet<String>,
    next_suffix: HashMap<String, u64>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-seeded with ids that must never be handed out
    pub fn with_reserved<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for id in ids {
            registry.reserve(id);
        }
        registry
    }

    /// Mark an id as used; returns false if it already was
    pub fn reserve(&mut self, id: impl Into<String>) -> bool {
        self.used.insert(id.into())
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Allocate and reserve the next free derivative id for a parent
    pub fn allocate(&mut self, parent_id: &str) -> String {
        let suffix = self.next_suffix.entry(parent_id.to_string()).or_insert(1);
        loop {
            let candidate = format!("{}-{}", parent_id, suffix);
            *suffix += 1;
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
