//! Per-entity category likelihoods.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// P(data | category, model) for every known category, plus the likelihood
/// of the data under a category that has not been observed yet.
///
/// Values are non-negative but need not sum to 1; they are combined with
/// priors or counts downstream. Known categories iterate in name order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Likelihoods {
    known: BTreeMap<String, f64>,
    unseen: f64,
}

impl Likelihoods {
    /// Likelihoods with no known categories.
    pub fn new(unseen: f64) -> Self {
        Self {
            known: BTreeMap::new(),
            unseen: sanitize(unseen),
        }
    }

    /// Build from `(category, likelihood)` pairs and the unseen term.
    pub fn from_pairs<I, K>(pairs: I, unseen: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let known = pairs
            .into_iter()
            .map(|(cat, p)| (cat.into(), sanitize(p)))
            .collect();
        Self {
            known,
            unseen: sanitize(unseen),
        }
    }

    /// Builder-style insert of one known category.
    pub fn with(mut self, category: impl Into<String>, likelihood: f64) -> Self {
        self.known.insert(category.into(), sanitize(likelihood));
        self
    }

    /// Likelihood under a known category, 0.0 when the category is absent.
    pub fn get(&self, category: &str) -> f64 {
        self.known.get(category).copied().unwrap_or(0.0)
    }

    /// Likelihood under an as-yet-unseen category.
    pub fn unseen(&self) -> f64 {
        self.unseen
    }

    /// Known categories and their likelihoods, in category-name order.
    pub fn known(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.known.iter().map(|(cat, p)| (cat.as_str(), *p))
    }

    /// Number of known categories.
    pub fn known_len(&self) -> usize {
        self.known.len()
    }
}

/// Negative or non-finite likelihoods carry no mass.
fn sanitize(p: f64) -> f64 {
    if p.is_finite() && p > 0.0 {
        p
    } else {
        0.0
    }
}
