//! Top-level dpal configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ConcentrationConfig, EntropyWeighting, SelectionConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DPAL_*`)
/// 2. Project config (`dpal.toml` in the given directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DpalConfig {
    pub selection: SelectionConfig,
    pub concentration: ConcentrationConfig,
}

impl DpalConfig {
    /// Load configuration, reading `dpal.toml` from `root` when present.
    pub fn load(root: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(root) = root {
            let path = root.join(CONFIG_FILE_NAME);
            if path.exists() {
                Self::merge_toml_file(&mut config, &path)?;
            }
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DpalConfig) -> Result<(), ConfigError> {
        if let Some(floor) = config.selection.entropy_floor {
            if !floor.is_finite() || floor <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "selection.entropy_floor".to_string(),
                    message: "must be positive and finite".to_string(),
                });
            }
        }
        if let Some(shape) = config.concentration.prior_shape {
            if !shape.is_finite() || shape <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "concentration.prior_shape".to_string(),
                    message: "must be positive and finite".to_string(),
                });
            }
        }
        if let Some(rate) = config.concentration.prior_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "concentration.prior_rate".to_string(),
                    message: "must be positive and finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut DpalConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DpalConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut DpalConfig, other: &DpalConfig) {
        // Selection
        if other.selection.seed.is_some() {
            base.selection.seed = other.selection.seed;
        }
        if other.selection.entropy_weighting.is_some() {
            base.selection.entropy_weighting = other.selection.entropy_weighting;
        }
        if other.selection.entropy_floor.is_some() {
            base.selection.entropy_floor = other.selection.entropy_floor;
        }

        // Concentration
        if other.concentration.prior_shape.is_some() {
            base.concentration.prior_shape = other.concentration.prior_shape;
        }
        if other.concentration.prior_rate.is_some() {
            base.concentration.prior_rate = other.concentration.prior_rate;
        }
        if other.concentration.burn_in.is_some() {
            base.concentration.burn_in = other.concentration.burn_in;
        }
        if other.concentration.samples.is_some() {
            base.concentration.samples = other.concentration.samples;
        }
        if other.concentration.seed.is_some() {
            base.concentration.seed = other.concentration.seed;
        }
    }

    /// Apply `DPAL_*` environment variables. Unparseable values are skipped
    /// with a warning.
    fn apply_env_overrides(config: &mut DpalConfig) {
        if let Some(seed) = env_parse::<u64>("DPAL_SEED") {
            config.selection.seed = Some(seed);
        }
        if let Some(weighting) = env_parse::<EntropyWeighting>("DPAL_ENTROPY_WEIGHTING") {
            config.selection.entropy_weighting = Some(weighting);
        }
        if let Some(floor) = env_parse::<f64>("DPAL_ENTROPY_FLOOR") {
            config.selection.entropy_floor = Some(floor);
        }
        if let Some(shape) = env_parse::<f64>("DPAL_CONCENTRATION_SHAPE") {
            config.concentration.prior_shape = Some(shape);
        }
        if let Some(rate) = env_parse::<f64>("DPAL_CONCENTRATION_RATE") {
            config.concentration.prior_rate = Some(rate);
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
