//! Shared test doubles for the dpal workspace.
//!
//! - [`TableClassifier`]: a classifier whose likelihoods come from a lookup
//!   table keyed by sample name.
//! - [`RecordingConcentration`]: a fixed concentration that remembers every
//!   update it was fed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dpal_core::errors::{DpalResult, PoolError};
use dpal_core::traits::{Classifier, ConcentrationLink};
use dpal_core::types::{CategoryCounts, Likelihoods};

/// Classifier backed by a `sample → likelihoods` table.
#[derive(Debug, Clone, Default)]
pub struct TableClassifier {
    table: HashMap<String, Likelihoods>,
    counts: CategoryCounts,
    categories: Vec<String>,
}

impl TableClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known category with its labelled-item count.
    pub fn category(mut self, name: &str, count: f64) -> Self {
        self.counts.insert(name, count);
        if !self.categories.iter().any(|c| c == name) {
            self.categories.push(name.to_string());
        }
        self
    }

    /// Register the likelihoods returned for `sample`.
    pub fn sample(mut self, sample: &str, likelihoods: Likelihoods) -> Self {
        self.table.insert(sample.to_string(), likelihoods);
        self
    }

    /// Register `sample` with `(category, likelihood)` pairs and the unseen term.
    pub fn sample_with(self, sample: &str, known: &[(&str, f64)], unseen: f64) -> Self {
        let likelihoods = Likelihoods::from_pairs(known.iter().copied(), unseen);
        self.sample(sample, likelihoods)
    }
}

impl Classifier<String> for TableClassifier {
    fn likelihoods(&self, sample: &String) -> DpalResult<Likelihoods> {
        self.table
            .get(sample)
            .cloned()
            .ok_or_else(|| PoolError::Classifier {
                message: format!("no likelihoods for sample {sample:?}"),
            })
    }

    fn category_counts(&self) -> CategoryCounts {
        self.counts.clone()
    }

    fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }
}

/// The three-entity scenario: `A` is confidently `cat1`, `B` is probably from
/// an unseen category, `C` is split evenly between the known categories.
pub fn abc_classifier() -> TableClassifier {
    TableClassifier::new()
        .category("cat1", 1.0)
        .category("cat2", 1.0)
        .sample_with("A", &[("cat1", 0.9), ("cat2", 0.05)], 0.05)
        .sample_with("B", &[("cat1", 0.1), ("cat2", 0.1)], 0.8)
        .sample_with("C", &[("cat1", 0.3), ("cat2", 0.3)], 0.4)
}

/// Constant concentration that records the `(categories, total)` pairs it
/// is updated with. Clones share the record.
#[derive(Debug, Clone)]
pub struct RecordingConcentration {
    value: f64,
    updates: Arc<Mutex<Vec<(usize, f64)>>>,
}

impl RecordingConcentration {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every update received so far, oldest first.
    pub fn updates(&self) -> Vec<(usize, f64)> {
        self.updates.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

impl ConcentrationLink for RecordingConcentration {
    fn update(&mut self, num_categories: usize, total_count: f64) {
        if let Ok(mut updates) = self.updates.lock() {
            updates.push((num_categories, total_count));
        }
    }

    fn get(&self) -> f64 {
        self.value
    }
}
