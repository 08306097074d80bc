//! Selection configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENTROPY_FLOOR;

/// Sign of the exponent used by stochastic entropy sampling.
///
/// `Literal` weights an entity by `exp(-beta * entropy)`, which favours
/// low-entropy entities for positive beta. `Inverted` uses
/// `exp(beta * entropy)` and favours the uncertain ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyWeighting {
    #[default]
    Literal,
    Inverted,
}

impl EntropyWeighting {
    /// Multiplier applied to beta before the exponential decay transform.
    pub fn sign(self) -> f64 {
        match self {
            Self::Literal => 1.0,
            Self::Inverted => -1.0,
        }
    }
}

impl FromStr for EntropyWeighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "inverted" => Ok(Self::Inverted),
            other => Err(format!("expected 'literal' or 'inverted', got '{other}'")),
        }
    }
}

/// Configuration for pool selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// RNG seed. Unset means seeded from the OS.
    pub seed: Option<u64>,
    /// Entropy sampling exponent sign. Default: literal.
    pub entropy_weighting: Option<EntropyWeighting>,
    /// Entropy numerical floor. Default: 1e-6.
    pub entropy_floor: Option<f64>,
}

impl SelectionConfig {
    /// Returns the effective entropy weighting, defaulting to literal.
    pub fn effective_entropy_weighting(&self) -> EntropyWeighting {
        self.entropy_weighting.unwrap_or_default()
    }

    /// Returns the effective entropy floor, defaulting to 1e-6.
    pub fn effective_entropy_floor(&self) -> f64 {
        self.entropy_floor.unwrap_or(DEFAULT_ENTROPY_FLOOR)
    }
}
