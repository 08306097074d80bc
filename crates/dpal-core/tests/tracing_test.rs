//! Tests for tracing initialization.

use std::sync::Mutex;

use dpal_core::tracing::init_tracing;

/// Serializes tests that touch `DPAL_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn per_crate_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("DPAL_LOG", "dpal_pool=debug,dpal_concentration=trace");
    init_tracing();
    std::env::remove_var("DPAL_LOG");
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still alive after repeated init");
}

#[test]
fn garbage_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("DPAL_LOG", "===not a filter===");
    init_tracing();
    std::env::remove_var("DPAL_LOG");
}
