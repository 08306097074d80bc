//! Pool errors.

use super::error_code::{self, DpalErrorCode};

/// Errors surfaced by pool storage, refresh, and selection.
///
/// Every variant is raised before the pool is mutated, so a failed call
/// leaves the pool exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PoolError {
    #[error("pool is not up to date: {reason}")]
    InvalidState { reason: String },

    #[error("cannot select from an empty pool")]
    EmptyPool,

    #[error("no entity in the pool has identifier {ident}")]
    NoMatch { ident: String },

    #[error("invalid prior: {reason}")]
    InvalidPrior { reason: String },

    #[error("unknown selection strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("classifier failed: {message}")]
    Classifier { message: String },
}

impl DpalErrorCode for PoolError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => error_code::INVALID_STATE,
            Self::EmptyPool => error_code::POOL_EMPTY,
            Self::NoMatch { .. } => error_code::NO_MATCH,
            Self::InvalidPrior { .. } | Self::UnknownStrategy { .. } => {
                error_code::INVALID_ARGUMENT
            }
            Self::Classifier { .. } => error_code::CLASSIFIER_ERROR,
        }
    }
}

/// Result alias used across the pool API.
pub type DpalResult<T> = Result<T, PoolError>;
