use dpal_core::config::ConcentrationConfig;
use dpal_core::constants::{
    DEFAULT_CONCENTRATION_BURN_IN, DEFAULT_CONCENTRATION_RATE, DEFAULT_CONCENTRATION_SAMPLES,
    DEFAULT_CONCENTRATION_SHAPE,
};
use dpal_core::errors::ConcentrationError;
use dpal_core::traits::ConcentrationLink;
use rand::prelude::*;
use rand_distr::{Beta, Gamma};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, warn};

/// Posterior-mean concentration under a `Gamma(shape, rate)` prior.
///
/// Until the first update with at least one labelled item the estimate is
/// the prior mean `shape / rate`. Each update warm-starts the chain from the
/// previous estimate.
#[derive(Debug, Clone)]
pub struct GammaPosteriorConcentration {
    shape: f64,
    rate: f64,
    burn_in: usize,
    samples: usize,
    rng: Xoshiro256PlusPlus,
    estimate: f64,
}

impl GammaPosteriorConcentration {
    /// Estimator with default iteration counts and an OS seed.
    pub fn new(shape: f64, rate: f64) -> Result<Self, ConcentrationError> {
        Self::build(
            shape,
            rate,
            DEFAULT_CONCENTRATION_BURN_IN,
            DEFAULT_CONCENTRATION_SAMPLES,
            rand::random(),
        )
    }

    /// Estimator from config. Unset fields take the compiled defaults.
    pub fn from_config(config: &ConcentrationConfig) -> Result<Self, ConcentrationError> {
        Self::build(
            config.effective_prior_shape(),
            config.effective_prior_rate(),
            config.effective_burn_in(),
            config.effective_samples(),
            config.seed.unwrap_or_else(rand::random),
        )
    }

    /// Same estimator with a fixed sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self
    }

    fn build(
        shape: f64,
        rate: f64,
        burn_in: usize,
        samples: usize,
        seed: u64,
    ) -> Result<Self, ConcentrationError> {
        if !(shape.is_finite() && shape > 0.0 && rate.is_finite() && rate > 0.0) {
            return Err(ConcentrationError::InvalidPrior { shape, rate });
        }
        Ok(Self {
            shape,
            rate,
            burn_in,
            samples: samples.max(1),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            estimate: shape / rate,
        })
    }

    /// Mean of the Gamma prior.
    pub fn prior_mean(&self) -> f64 {
        self.shape / self.rate
    }

    /// One Gibbs sweep: draw η, then α given η. Returns `None` when a
    /// distribution cannot be built from the current state.
    fn step(&mut self, alpha: f64, k: f64, n: f64) -> Option<f64> {
        let eta: f64 = Beta::new(alpha + 1.0, n).ok()?.sample(&mut self.rng);
        let eta = eta.max(f64::MIN_POSITIVE);
        let rate = self.rate - eta.ln();

        let odds = (self.shape + k - 1.0) / (n * rate);
        let pi = odds / (1.0 + odds);
        let shape = if self.rng.random::<f64>() < pi {
            self.shape + k
        } else {
            self.shape + k - 1.0
        };

        let draw: f64 = Gamma::new(shape, 1.0 / rate).ok()?.sample(&mut self.rng);
        Some(draw.max(0.0))
    }
}

impl Default for GammaPosteriorConcentration {
    fn default() -> Self {
        Self {
            shape: DEFAULT_CONCENTRATION_SHAPE,
            rate: DEFAULT_CONCENTRATION_RATE,
            burn_in: DEFAULT_CONCENTRATION_BURN_IN,
            samples: DEFAULT_CONCENTRATION_SAMPLES,
            rng: Xoshiro256PlusPlus::seed_from_u64(rand::random()),
            estimate: DEFAULT_CONCENTRATION_SHAPE / DEFAULT_CONCENTRATION_RATE,
        }
    }
}

impl ConcentrationLink for GammaPosteriorConcentration {
    fn update(&mut self, num_categories: usize, total_count: f64) {
        if num_categories == 0 || !(total_count.is_finite() && total_count > 0.0) {
            self.estimate = self.prior_mean();
            debug!(
                num_categories,
                total_count,
                estimate = self.estimate,
                "no labelled data, concentration reset to prior mean"
            );
            return;
        }

        let k = num_categories as f64;
        let n = total_count;
        let mut alpha = if self.estimate > 0.0 {
            self.estimate
        } else {
            self.prior_mean()
        };

        let mut sum = 0.0;
        let mut kept = 0usize;
        for iter in 0..self.burn_in + self.samples {
            match self.step(alpha, k, n) {
                Some(next) => alpha = next,
                None => {
                    warn!(alpha, k, n, "concentration sampler step rejected");
                    continue;
                }
            }
            if iter >= self.burn_in {
                sum += alpha;
                kept += 1;
            }
        }

        if kept > 0 {
            self.estimate = sum / kept as f64;
        }
        debug!(
            num_categories,
            total_count,
            estimate = self.estimate,
            kept,
            "concentration updated"
        );
    }

    fn get(&self) -> f64 {
        self.estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_prior_mean() {
        let est = GammaPosteriorConcentration::new(2.0, 4.0).unwrap();
        assert_eq!(est.get(), 0.5);
    }

    #[test]
    fn invalid_prior_rejected() {
        assert_eq!(
            GammaPosteriorConcentration::new(0.0, 1.0).unwrap_err(),
            ConcentrationError::InvalidPrior {
                shape: 0.0,
                rate: 1.0
            }
        );
        assert!(GammaPosteriorConcentration::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn no_data_resets_to_prior_mean() {
        let mut est = GammaPosteriorConcentration::new(3.0, 1.0)
            .unwrap()
            .with_seed(1);
        est.update(5, 50.0);
        assert_ne!(est.get(), 3.0);
        est.update(0, 0.0);
        assert_eq!(est.get(), 3.0);
    }

    #[test]
    fn step_stays_positive() {
        let mut est = GammaPosteriorConcentration::default().with_seed(9);
        let mut alpha = 1.0;
        for _ in 0..500 {
            alpha = est.step(alpha, 4.0, 40.0).unwrap();
            assert!(alpha.is_finite() && alpha >= 0.0);
        }
    }
}
