//! Per-entity scoring for each selection strategy.
//!
//! Every function here is pure: it scores one entity's likelihoods against
//! the pool's prior, counts and concentration. The pool turns the scores into
//! a choice through [`crate::weighted`].

pub mod dirichlet;
pub mod entropy;
pub mod outlier;
pub mod wrong;

/// Divide `values` by their sum in place. A non-positive or non-finite sum
/// zeroes every value instead.
pub(crate) fn normalize_in_place(values: &mut [f64], extra_mass: f64) -> f64 {
    let total: f64 = values.iter().sum::<f64>() + extra_mass;
    if total > 0.0 && total.is_finite() {
        for v in values.iter_mut() {
            *v /= total;
        }
        total
    } else {
        for v in values.iter_mut() {
            *v = 0.0;
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_divides_by_total() {
        let mut v = vec![1.0, 3.0];
        let total = normalize_in_place(&mut v, 0.0);
        assert_eq!(total, 4.0);
        assert_eq!(v, vec![0.25, 0.75]);
    }

    #[test]
    fn normalize_counts_extra_mass() {
        let mut v = vec![1.0, 1.0];
        normalize_in_place(&mut v, 2.0);
        assert_eq!(v, vec![0.25, 0.25]);
    }

    #[test]
    fn zero_total_zeroes() {
        let mut v = vec![0.0, 0.0];
        assert_eq!(normalize_in_place(&mut v, 0.0), 0.0);
        assert_eq!(v, vec![0.0, 0.0]);
    }
}
