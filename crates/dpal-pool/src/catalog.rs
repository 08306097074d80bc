//! Named selection strategies.
//!
//! A fixed table from name to parameterized pool call, so experiment drivers
//! can pick a strategy from a string. `p_wrong_soft` is the published method
//! and the default.

use std::fmt;
use std::str::FromStr;

use dpal_core::errors::PoolError;
use serde::{Deserialize, Serialize};

/// Every strategy reachable through [`crate::Pool::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Random,
    Outlier,
    Entropy,
    PNewHard,
    PNewSoft,
    PWrongHard,
    #[default]
    PWrongSoft,
    PWrongHardPcat,
    PWrongSoftPcat,
    PWrongHardNaive,
    PWrongSoftNaive,
    PWrongHardPcatNaive,
    PWrongSoftPcatNaive,
}

/// The pool call a strategy stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyCall {
    Random,
    Outlier,
    Entropy,
    New {
        hard_choice: bool,
    },
    Wrong {
        soft_select: bool,
        hard_choice: bool,
        dp: bool,
    },
}

impl Strategy {
    /// All strategies, in catalog order.
    pub const ALL: [Strategy; 13] = [
        Self::Random,
        Self::Outlier,
        Self::Entropy,
        Self::PNewHard,
        Self::PNewSoft,
        Self::PWrongHard,
        Self::PWrongSoft,
        Self::PWrongHardPcat,
        Self::PWrongSoftPcat,
        Self::PWrongHardNaive,
        Self::PWrongSoftNaive,
        Self::PWrongHardPcatNaive,
        Self::PWrongSoftPcatNaive,
    ];

    /// All strategy names, in catalog order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Outlier => "outlier",
            Self::Entropy => "entropy",
            Self::PNewHard => "p_new_hard",
            Self::PNewSoft => "p_new_soft",
            Self::PWrongHard => "p_wrong_hard",
            Self::PWrongSoft => "p_wrong_soft",
            Self::PWrongHardPcat => "p_wrong_hard_pcat",
            Self::PWrongSoftPcat => "p_wrong_soft_pcat",
            Self::PWrongHardNaive => "p_wrong_hard_naive",
            Self::PWrongSoftNaive => "p_wrong_soft_naive",
            Self::PWrongHardPcatNaive => "p_wrong_hard_pcat_naive",
            Self::PWrongSoftPcatNaive => "p_wrong_soft_pcat_naive",
        }
    }

    /// The fixed parameterization behind this name.
    ///
    /// `pcat` variants let the classifier sample its prediction
    /// (`soft_select`), `naive` variants drop the Dirichlet-Process term, and
    /// `hard`/`soft` choose between arg-max and a proportional draw.
    pub fn call(self) -> StrategyCall {
        let wrong = |soft_select, hard_choice, dp| StrategyCall::Wrong {
            soft_select,
            hard_choice,
            dp,
        };
        match self {
            Self::Random => StrategyCall::Random,
            Self::Outlier => StrategyCall::Outlier,
            Self::Entropy => StrategyCall::Entropy,
            Self::PNewHard => StrategyCall::New { hard_choice: true },
            Self::PNewSoft => StrategyCall::New { hard_choice: false },
            Self::PWrongHard => wrong(false, true, true),
            Self::PWrongSoft => wrong(false, false, true),
            Self::PWrongHardPcat => wrong(true, true, true),
            Self::PWrongSoftPcat => wrong(true, false, true),
            Self::PWrongHardNaive => wrong(false, true, false),
            Self::PWrongSoftNaive => wrong(false, false, false),
            Self::PWrongHardPcatNaive => wrong(true, true, false),
            Self::PWrongSoftPcatNaive => wrong(true, false, false),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| PoolError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}
