//! classdef CLI library.
//!
//! Commands live here (rather than in `main.rs`) so tests can call them directly.

pub mod commands;

/// Initialize `env_logger`, honoring `RUST_LOG` and defaulting to `warn`.
///
/// Each `-v` raises the default one level (`info`, `debug`, `trace`).
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A logger may already be installed (e.g. when commands run inside tests).
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    )
    .try_init();
}
