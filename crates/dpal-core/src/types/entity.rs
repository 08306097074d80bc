//! Pool entities.

use super::Likelihoods;

/// One pool item: the stored sample, its category likelihoods, and an
/// arbitrary identifier (in experiments often the true category).
///
/// `likelihoods` is `None` from `store` until the next pool update.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<S, I = String> {
    pub sample: S,
    pub likelihoods: Option<Likelihoods>,
    pub ident: Option<I>,
}

impl<S, I> Entity<S, I> {
    /// A freshly stored entity with no likelihoods yet.
    pub fn new(sample: S, ident: Option<I>) -> Self {
        Self {
            sample,
            likelihoods: None,
            ident,
        }
    }

    /// Whether an update has populated this entity's likelihoods.
    pub fn is_scored(&self) -> bool {
        self.likelihoods.is_some()
    }
}
