//! Concentration estimator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONCENTRATION_BURN_IN, DEFAULT_CONCENTRATION_RATE, DEFAULT_CONCENTRATION_SAMPLES,
    DEFAULT_CONCENTRATION_SHAPE,
};

/// Configuration for the Gibbs-sampled concentration estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConcentrationConfig {
    /// Gamma prior shape. Default: 1.0.
    pub prior_shape: Option<f64>,
    /// Gamma prior rate. Default: 1.0.
    pub prior_rate: Option<f64>,
    /// Iterations discarded before averaging. Default: 128.
    pub burn_in: Option<usize>,
    /// Iterations averaged into the estimate. Default: 128.
    pub samples: Option<usize>,
    /// Sampler seed. Unset means seeded from the OS.
    pub seed: Option<u64>,
}

impl ConcentrationConfig {
    pub fn effective_prior_shape(&self) -> f64 {
        self.prior_shape.unwrap_or(DEFAULT_CONCENTRATION_SHAPE)
    }

    pub fn effective_prior_rate(&self) -> f64 {
        self.prior_rate.unwrap_or(DEFAULT_CONCENTRATION_RATE)
    }

    pub fn effective_burn_in(&self) -> usize {
        self.burn_in.unwrap_or(DEFAULT_CONCENTRATION_BURN_IN)
    }

    /// At least one sample is always drawn.
    pub fn effective_samples(&self) -> usize {
        self.samples.unwrap_or(DEFAULT_CONCENTRATION_SAMPLES).max(1)
    }
}
