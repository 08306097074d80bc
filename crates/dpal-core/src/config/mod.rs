//! Configuration system for dpal.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod concentration_config;
pub mod dpal_config;
pub mod selection_config;

pub use concentration_config::ConcentrationConfig;
pub use dpal_config::DpalConfig;
pub use selection_config::{EntropyWeighting, SelectionConfig};
