//! Concentration estimator errors.

use super::error_code::{self, DpalErrorCode};

/// Errors raised while constructing a concentration estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConcentrationError {
    #[error("invalid Gamma prior: shape {shape}, rate {rate} (both must be positive and finite)")]
    InvalidPrior { shape: f64, rate: f64 },
}

impl DpalErrorCode for ConcentrationError {
    fn error_code(&self) -> &'static str {
        error_code::CONCENTRATION_ERROR
    }
}
