//! Console logging using env_logger
//!
//! The level defaults to `info` and can be overridden with `RUST_LOG`,
//! e.g. `RUST_LOG=debug` to see every API call.

use env_logger::{Builder, Env};

pub const DEFAULT_FILTER: &str = "info";

/// Initialize logging to stderr
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .format_target(false)
        .try_init();
}
