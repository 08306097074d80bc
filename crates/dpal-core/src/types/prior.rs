//! Category prior used to reweight likelihoods.

use std::collections::BTreeMap;

use crate::constants::UNIFORM_PRIOR_WEIGHT;
use crate::errors::{DpalResult, PoolError};

/// Per-category weighting applied to likelihoods by the outlier, entropy and
/// P(wrong) strategies.
///
/// `Uniform` gives every category weight 1.0 without normalizing, since the
/// set of categories is open. `Explicit` holds caller-supplied weights
/// normalized to sum to 1; categories the caller left out weigh 0.0.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Prior {
    #[default]
    Uniform,
    Explicit(BTreeMap<String, f64>),
}

impl Prior {
    /// Normalize caller weights into an explicit prior.
    ///
    /// Fails if any weight is negative or non-finite, or if the weights sum
    /// to zero or less.
    pub fn normalized<I, K>(weights: I) -> DpalResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (cat, w) in weights {
            let cat = cat.into();
            if !w.is_finite() || w < 0.0 {
                return Err(PoolError::InvalidPrior {
                    reason: format!("weight for {cat:?} is {w}"),
                });
            }
            map.insert(cat, w);
        }

        let total: f64 = map.values().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(PoolError::InvalidPrior {
                reason: format!("weights sum to {total}"),
            });
        }
        for w in map.values_mut() {
            *w /= total;
        }
        Ok(Self::Explicit(map))
    }

    /// Weight of a category.
    pub fn weight(&self, category: &str) -> f64 {
        match self {
            Self::Uniform => UNIFORM_PRIOR_WEIGHT,
            Self::Explicit(map) => map.get(category).copied().unwrap_or(0.0),
        }
    }

    /// Normalized weights, or `None` under the uniform prior.
    pub fn weights(&self) -> Option<&BTreeMap<String, f64>> {
        match self {
            Self::Uniform => None,
            Self::Explicit(map) => Some(map),
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform)
    }
}
