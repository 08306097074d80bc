//! Entropy score: uncertainty of the prior-weighted posterior.

use dpal_core::types::{Likelihoods, Prior};

/// Shannon entropy (nats) of `P(data|cat)·prior(cat)` over the known
/// categories, after dropping terms at or below `floor` and renormalizing.
///
/// `None` when every term falls below the floor: the entity carries no
/// usable mass and counts as zero entropy with zero draw weight.
pub fn entropy(likelihoods: &Likelihoods, prior: &Prior, floor: f64) -> Option<f64> {
    let retained: Vec<f64> = likelihoods
        .known()
        .map(|(cat, p)| p * prior.weight(cat))
        .filter(|&pp| pp > floor)
        .collect();

    let total: f64 = retained.iter().sum();
    if retained.is_empty() || !(total.is_finite() && total > 0.0) {
        return None;
    }

    let h = retained
        .iter()
        .map(|&pp| {
            let q = pp / total;
            -q * q.ln()
        })
        .sum::<f64>();
    Some(h.max(0.0))
}
