//! Per-category observation counts captured from the classifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of how many labelled items the classifier holds per category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryCounts(BTreeMap<String, f64>);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a category.
    pub fn insert(&mut self, category: impl Into<String>, count: f64) {
        self.0.insert(category.into(), count.max(0.0));
    }

    /// Count for a category, 0.0 if never observed.
    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Number of categories with a count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(cat, n)| (cat.as_str(), *n))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CategoryCounts {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut counts = Self::new();
        for (cat, n) in iter {
            counts.insert(cat, n);
        }
        counts
    }
}
