//! P(new): Chinese-Restaurant-Process probability that an entity came from
//! a category nobody has labelled yet.

use dpal_core::types::{CategoryCounts, Likelihoods};

/// ```text
/// new  = P(data|unseen) · concentration
/// P    = new / (new + Σ P(data|cat) · count(cat))
/// ```
///
/// Returns 0.0 when the denominator is not positive and finite.
pub fn p_new(likelihoods: &Likelihoods, counts: &CategoryCounts, concentration: f64) -> f64 {
    let new = likelihoods.unseen() * concentration;
    let div = new
        + likelihoods
            .known()
            .map(|(cat, p)| p * counts.get(cat))
            .sum::<f64>();
    if div > 0.0 && div.is_finite() {
        (new / div).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
