//! Tests for the dpal configuration system.

use std::sync::Mutex;

use dpal_core::config::{DpalConfig, EntropyWeighting};
use dpal_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_dpal_env_vars() {
    for key in [
        "DPAL_SEED",
        "DPAL_ENTROPY_WEIGHTING",
        "DPAL_ENTROPY_FLOOR",
        "DPAL_CONCENTRATION_SHAPE",
        "DPAL_CONCENTRATION_RATE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_without_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_dpal_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = DpalConfig::load(Some(dir.path())).unwrap();

    assert!(config.selection.seed.is_none());
    assert_eq!(
        config.selection.effective_entropy_weighting(),
        EntropyWeighting::Literal
    );
    assert_eq!(config.selection.effective_entropy_floor(), 1e-6);
    assert_eq!(config.concentration.effective_prior_shape(), 1.0);
    assert_eq!(config.concentration.effective_prior_rate(), 1.0);
    assert_eq!(config.concentration.effective_burn_in(), 128);
    assert_eq!(config.concentration.effective_samples(), 128);
}

#[test]
fn project_file_then_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_dpal_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("dpal.toml"),
        r#"
[selection]
seed = 7
entropy_weighting = "inverted"

[concentration]
prior_shape = 2.0
samples = 32
"#,
    )
    .unwrap();

    std::env::set_var("DPAL_SEED", "99");
    let config = DpalConfig::load(Some(dir.path())).unwrap();

    assert_eq!(config.selection.seed, Some(99));
    assert_eq!(
        config.selection.effective_entropy_weighting(),
        EntropyWeighting::Inverted
    );
    assert_eq!(config.concentration.effective_prior_shape(), 2.0);
    assert_eq!(config.concentration.effective_samples(), 32);

    clear_dpal_env_vars();
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_dpal_env_vars();

    std::env::set_var("DPAL_ENTROPY_WEIGHTING", "sideways");
    let config = DpalConfig::load(None).unwrap();
    assert!(config.selection.entropy_weighting.is_none());

    clear_dpal_env_vars();
}

#[test]
fn invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_dpal_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("dpal.toml"), "[selection\nseed = ").unwrap();

    let err = DpalConfig::load(Some(dir.path())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_positive_floor_fails_validation() {
    let err = DpalConfig::from_toml("[selection]\nentropy_floor = 0.0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "selection.entropy_floor");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn non_positive_gamma_rate_fails_validation() {
    let err = DpalConfig::from_toml("[concentration]\nprior_rate = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = DpalConfig::from_toml("[selection]\nseed = 3\nflavour = \"mint\"\n").unwrap();
    assert_eq!(config.selection.seed, Some(3));
}

#[test]
fn config_round_trips_through_json() {
    let config = DpalConfig::from_toml("[selection]\nentropy_weighting = \"inverted\"\n").unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"inverted\""));
}
