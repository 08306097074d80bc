//! Collaborator traits consumed by the pool.

pub mod classifier;
pub mod concentration;

pub use classifier::Classifier;
pub use concentration::{ConcentrationLink, FixedConcentration};
