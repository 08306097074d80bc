//! Weighted choice shared by every selection strategy.
//!
//! Two modes:
//! - deterministic extremum (`arg_min` / `arg_max`), ties to the lowest index;
//! - roulette draw proportional to non-negative weights, falling back to the
//!   last index when rounding leaves the remainder non-negative.

use rand::Rng;

/// How raw scores become draw weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightTransform {
    /// Scores are the weights.
    Identity,
    /// `w = exp(-beta · s)`.
    ExpDecay { beta: f64 },
}

impl WeightTransform {
    /// Draw weights for `scores`. Non-finite scores get weight 0.
    ///
    /// `ExpDecay` shifts every exponent by the largest one before
    /// exponentiating, so the result is the same distribution scaled to a
    /// maximum weight of 1 and never overflows.
    pub fn weights(self, scores: &[f64]) -> Vec<f64> {
        match self {
            Self::Identity => scores.iter().map(|&s| clean_weight(s)).collect(),
            Self::ExpDecay { beta } => {
                let exponents: Vec<Option<f64>> = scores
                    .iter()
                    .map(|&s| {
                        let e = -beta * s;
                        if s.is_finite() && e.is_finite() {
                            Some(e)
                        } else {
                            None
                        }
                    })
                    .collect();
                let shift = exponents
                    .iter()
                    .flatten()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max);
                exponents
                    .into_iter()
                    .map(|e| match e {
                        Some(e) => (e - shift).exp(),
                        None => 0.0,
                    })
                    .collect()
            }
        }
    }
}

/// Index of the smallest finite score. Ties go to the lowest index.
/// If no score is finite, index 0. `None` only for an empty slice.
pub fn arg_min(scores: &[f64]) -> Option<usize> {
    arg_extremum(scores, |candidate, best| candidate < best)
}

/// Index of the largest finite score. Ties go to the lowest index.
/// If no score is finite, index 0. `None` only for an empty slice.
pub fn arg_max(scores: &[f64]) -> Option<usize> {
    arg_extremum(scores, |candidate, best| candidate > best)
}

fn arg_extremum(scores: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, &s) in scores.iter().enumerate() {
        if !s.is_finite() {
            continue;
        }
        match best {
            Some((_, b)) if !better(s, b) => {}
            _ => best = Some((i, s)),
        }
    }
    Some(best.map_or(0, |(i, _)| i))
}

/// Roulette walk for a uniform variate `u` in `[0, 1)`.
///
/// `r = u · Σw`; subtract weights in index order until `r` goes negative.
/// The last index is returned if the walk reaches it, so a selection is
/// always made for a non-empty slice.
pub fn roulette_at(weights: &[f64], u: f64) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().map(|&w| clean_weight(w)).sum();
    let mut r = u * total;
    let last = weights.len() - 1;
    let mut pos = 0;
    while pos < last {
        r -= clean_weight(weights[pos]);
        if r < 0.0 {
            break;
        }
        pos += 1;
    }
    Some(pos)
}

/// Roulette draw with a fresh variate from `rng`.
pub fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    roulette_at(weights, rng.random::<f64>())
}

/// Transform `scores` into weights and draw one index.
pub fn weighted_draw<R: Rng + ?Sized>(
    scores: &[f64],
    transform: WeightTransform,
    rng: &mut R,
) -> Option<usize> {
    roulette(&transform.weights(scores), rng)
}

fn clean_weight(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}
