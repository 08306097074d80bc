/// dpal version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Likelihood·prior products at or below this value are dropped before the
/// entropy of an entity is computed.
pub const DEFAULT_ENTROPY_FLOOR: f64 = 1e-6;

/// Weight every category receives under the uniform prior.
pub const UNIFORM_PRIOR_WEIGHT: f64 = 1.0;

/// Gamma prior on the concentration: shape.
pub const DEFAULT_CONCENTRATION_SHAPE: f64 = 1.0;

/// Gamma prior on the concentration: rate.
pub const DEFAULT_CONCENTRATION_RATE: f64 = 1.0;

/// Gibbs iterations discarded before averaging concentration samples.
pub const DEFAULT_CONCENTRATION_BURN_IN: usize = 128;

/// Gibbs iterations averaged into the concentration estimate.
pub const DEFAULT_CONCENTRATION_SAMPLES: usize = 128;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "dpal.toml";
