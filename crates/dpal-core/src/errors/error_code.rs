//! DpalErrorCode trait for structured error reporting.

/// Every dpal error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait DpalErrorCode {
    /// Returns the error code string (e.g., "POOL_EMPTY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const POOL_EMPTY: &str = "POOL_EMPTY";
pub const INVALID_STATE: &str = "INVALID_STATE";
pub const NO_MATCH: &str = "NO_MATCH";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const CLASSIFIER_ERROR: &str = "CLASSIFIER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONCENTRATION_ERROR: &str = "CONCENTRATION_ERROR";
