//! Outlier score: how well the known categories explain an entity.

use dpal_core::types::{Likelihoods, Prior};

/// Prior-weighted marginal likelihood `Σ P(data|cat)·prior(cat)` over the
/// known categories. Low means poorly explained by anything seen so far.
pub fn score(likelihoods: &Likelihoods, prior: &Prior) -> f64 {
    likelihoods
        .known()
        .map(|(cat, p)| p * prior.weight(cat))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_known_ignoring_unseen() {
        let l = Likelihoods::new(0.9).with("a", 0.2).with("b", 0.3);
        assert!((score(&l, &Prior::Uniform) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn prior_reweights() {
        let l = Likelihoods::new(0.0).with("a", 0.2).with("b", 0.4);
        let prior = Prior::normalized([("a", 3.0), ("b", 1.0)]).unwrap();
        // 0.2·0.75 + 0.4·0.25
        assert!((score(&l, &prior) - 0.25).abs() < 1e-12);
    }
}
