#![allow(dead_code)]

pub mod mock;

use parking_lot::{const_mutex, Mutex, MutexGuard};
use tracing_subscriber::EnvFilter;

// dear imgui allows a single active context per process.
static CONTEXT_LOCK: Mutex<()> = const_mutex(());

/// Serialize tests that create an imgui context. Keep the guard alive for
/// the whole test, declared before the context.
pub fn context_lock() -> MutexGuard<'static, ()> {
    setup_tracing();
    CONTEXT_LOCK.lock()
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .ok();
}
