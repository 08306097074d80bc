//! # dpal-core
//!
//! Foundation crate for the dpal active learning selection engine.
//! Defines the entity and likelihood types, the classifier and concentration
//! collaborator traits, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DpalConfig;
pub use errors::{DpalResult, PoolError};
pub use traits::{Classifier, ConcentrationLink, FixedConcentration};
pub use types::{CategoryCounts, Entity, Likelihoods, Prior};
