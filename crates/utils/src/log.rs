use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

pub fn init_tracing_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default()))
        .with_ansi(detect_ansi_support())
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the log filter from a `RUST_LOG` style directive, falling back to `info`.
fn env_filter(rust_log: &str) -> EnvFilter {
    match rust_log.trim().is_empty() {
        true => EnvFilter::builder().parse_lossy(DEFAULT_LOG_FILTER),
        false => EnvFilter::builder().parse_lossy(rust_log),
    }
}

pub fn detect_ansi_support() -> bool {
    // Logs go to stderr so that stdout carries only the resolved config.
    if !atty::is(atty::Stream::Stderr) {
        return false;
    }

    env::var("TERM")
        .map(|term| term != "dumb")
        .unwrap_or(false)
}
