// tests/common.rs
//! Tracing for integration tests

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route `cbc_envelope` events to the test harness; filter with RUST_LOG
#[allow(dead_code)]
pub fn setup() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}
