use crate::errors::DpalResult;
use crate::types::{CategoryCounts, Likelihoods};

/// The probabilistic classifier whose current state a pool update snapshots.
///
/// Training and retraining happen outside the pool; the pool only reads.
pub trait Classifier<S> {
    /// Likelihood of `sample` under every known category, plus the unseen term.
    fn likelihoods(&self, sample: &S) -> DpalResult<Likelihoods>;

    /// Number of labelled items per known category.
    fn category_counts(&self) -> CategoryCounts;

    /// Known category names.
    fn categories(&self) -> Vec<String>;
}
