//! Stderr logging driven by `RUST_LOG`.
//!
//! Records emitted through the `log` macros are forwarded to the tracing
//! subscriber, so stdout carries only results.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Builds the filter for the given `RUST_LOG` directives, defaulting to `info`.
///
/// Directives that fail to parse are skipped.
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Installs the stderr subscriber, filtered by `RUST_LOG`.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directives = std::env::var("RUST_LOG").unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directives))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
}
