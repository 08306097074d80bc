//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "dpal_core=info,dpal_pool=info,dpal_concentration=info";

/// Initialize the dpal tracing/logging system.
///
/// Reads the `DPAL_LOG` environment variable for per-module log levels.
/// Format: `DPAL_LOG=dpal_pool=debug,dpal_concentration=trace`
///
/// Falls back to info for every dpal crate if `DPAL_LOG` is not set or is invalid.
///
/// Idempotent: calling it more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("DPAL_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
