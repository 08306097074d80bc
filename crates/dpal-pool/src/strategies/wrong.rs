//! P(wrong): probability that the current classifier mislabels an entity.
//!
//! Two distributions over the entity's categories are combined:
//!
//! - `sel`: what the classifier would predict, `P(data|cat)·prior(cat)`
//!   normalized over the known categories.
//! - `is`: what the entity actually is, `P(data|cat)·count(cat)` over the known
//!   categories, plus `P(data|unseen)·concentration` when the Dirichlet-Process
//!   assumption is on. The classifier can never predict the unseen category,
//!   so mass there always counts as a mistake.
//!
//! With `soft_select` the classifier samples its prediction from `sel` and
//! `P(wrong) = 1 - Σ sel·is`. Otherwise it predicts `argmax sel` and
//! `P(wrong) = 1 - is[argmax sel]`.

use dpal_core::types::{CategoryCounts, Likelihoods, Prior};

use super::normalize_in_place;

/// Decision-rule and posterior model used by [`p_wrong`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongModel {
    /// Classifier samples its prediction instead of taking the mode.
    pub soft_select: bool,
    /// Include the new-category mass in the true posterior.
    pub dp: bool,
}

/// Misclassification probability of one entity, in `[0, 1]`.
///
/// With no known categories the classifier has nothing to predict and the
/// result is 1.0.
pub fn p_wrong(
    likelihoods: &Likelihoods,
    prior: &Prior,
    counts: &CategoryCounts,
    concentration: f64,
    model: WrongModel,
) -> f64 {
    let mut sel: Vec<f64> = likelihoods
        .known()
        .map(|(cat, p)| p * prior.weight(cat))
        .collect();
    normalize_in_place(&mut sel, 0.0);

    let mut is: Vec<f64> = likelihoods
        .known()
        .map(|(cat, p)| p * counts.get(cat))
        .collect();
    let new_mass = if model.dp {
        likelihoods.unseen() * concentration
    } else {
        0.0
    };
    normalize_in_place(&mut is, new_mass);

    let wrong = if model.soft_select {
        1.0 - sel.iter().zip(&is).map(|(s, i)| s * i).sum::<f64>()
    } else {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &s) in sel.iter().enumerate() {
            if best.map_or(true, |(_, b)| s > b) {
                best = Some((idx, s));
            }
        }
        match best {
            Some((idx, _)) => 1.0 - is[idx],
            None => 1.0,
        }
    };

    wrong.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HARD_DP: WrongModel = WrongModel {
        soft_select: false,
        dp: true,
    };
    const SOFT_DP: WrongModel = WrongModel {
        soft_select: true,
        dp: true,
    };
    const HARD_NAIVE: WrongModel = WrongModel {
        soft_select: false,
        dp: false,
    };

    fn even_counts() -> CategoryCounts {
        [("a", 1.0), ("b", 1.0)].into_iter().collect()
    }

    #[test]
    fn hard_rule_uses_mode_of_selection() {
        let l = Likelihoods::new(0.0).with("a", 0.6).with("b", 0.2);
        // is = {a: 0.75, b: 0.25}; mode of sel is a.
        let w = p_wrong(&l, &Prior::Uniform, &even_counts(), 1.0, HARD_DP);
        assert!((w - 0.25).abs() < 1e-12);
    }

    #[test]
    fn soft_rule_is_expected_mismatch() {
        let l = Likelihoods::new(0.0).with("a", 0.6).with("b", 0.2);
        // sel = is = {0.75, 0.25}; 1 - (0.5625 + 0.0625)
        let w = p_wrong(&l, &Prior::Uniform, &even_counts(), 1.0, SOFT_DP);
        assert!((w - 0.375).abs() < 1e-12);
    }

    #[test]
    fn new_category_mass_counts_as_wrong() {
        let l = Likelihoods::new(0.8).with("a", 0.1).with("b", 0.1);
        let with_dp = p_wrong(&l, &Prior::Uniform, &even_counts(), 1.0, HARD_DP);
        let naive = p_wrong(&l, &Prior::Uniform, &even_counts(), 1.0, HARD_NAIVE);
        // is with dp = {0.1, 0.1, 0.8}; mode of sel is a (first in order).
        assert!((with_dp - 0.9).abs() < 1e-12);
        assert!((naive - 0.5).abs() < 1e-12);
    }

    #[test]
    fn prior_changes_prediction_not_truth() {
        let l = Likelihoods::new(0.0).with("a", 0.5).with("b", 0.5);
        let counts: CategoryCounts = [("a", 9.0), ("b", 1.0)].into_iter().collect();
        let prior = Prior::normalized([("a", 1.0), ("b", 9.0)]).unwrap();
        // Predicts b, truth is {a: 0.9, b: 0.1}.
        let w = p_wrong(&l, &prior, &counts, 0.0, HARD_NAIVE);
        assert!((w - 0.9).abs() < 1e-12);
    }

    #[test]
    fn no_categories_is_certainly_wrong() {
        let l = Likelihoods::new(0.4);
        let w = p_wrong(&l, &Prior::Uniform, &CategoryCounts::new(), 1.0, HARD_DP);
        assert_eq!(w, 1.0);
    }

    #[test]
    fn degenerate_masses_stay_finite() {
        let l = Likelihoods::new(0.0).with("a", 0.0).with("b", 0.0);
        for model in [HARD_DP, SOFT_DP, HARD_NAIVE] {
            let w = p_wrong(&l, &Prior::Uniform, &even_counts(), 0.0, model);
            assert!(w.is_finite());
            assert_eq!(w, 1.0);
        }
    }
}
