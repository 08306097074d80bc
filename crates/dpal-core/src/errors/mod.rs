//! Error handling for dpal.
//! One error enum per subsystem, `thiserror` only.

pub mod concentration_error;
pub mod config_error;
pub mod error_code;
pub mod pool_error;

pub use concentration_error::ConcentrationError;
pub use config_error::ConfigError;
pub use error_code::DpalErrorCode;
pub use pool_error::{DpalResult, PoolError};
