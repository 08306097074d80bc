use dpal_core::errors::{ConcentrationError, ConfigError, DpalErrorCode, PoolError};

#[test]
fn pool_error_codes() {
    assert_eq!(PoolError::EmptyPool.error_code(), "POOL_EMPTY");
    assert_eq!(
        PoolError::InvalidState {
            reason: "x".into()
        }
        .error_code(),
        "INVALID_STATE"
    );
    assert_eq!(
        PoolError::NoMatch { ident: "y".into() }.error_code(),
        "NO_MATCH"
    );
    assert_eq!(
        PoolError::InvalidPrior {
            reason: "z".into()
        }
        .error_code(),
        "INVALID_ARGUMENT"
    );
    assert_eq!(
        PoolError::UnknownStrategy {
            name: "magic".into()
        }
        .error_code(),
        "INVALID_ARGUMENT"
    );
    assert_eq!(
        PoolError::Classifier {
            message: "boom".into()
        }
        .error_code(),
        "CLASSIFIER_ERROR"
    );
}

#[test]
fn coded_string_prefixes_message() {
    let err = PoolError::UnknownStrategy {
        name: "magic".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[INVALID_ARGUMENT] unknown selection strategy: magic"
    );
}

#[test]
fn subsystem_codes() {
    let config = ConfigError::FileNotFound {
        path: "dpal.toml".into(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let conc = ConcentrationError::InvalidPrior {
        shape: 0.0,
        rate: 1.0,
    };
    assert_eq!(conc.error_code(), "CONCENTRATION_ERROR");
}
