//! Logging Infrastructure
//!
//! Structured logging setup shared by the binary and tests.

/// Initialize the logger, level taken from LOG_LEVEL (default `info`)
pub fn init_logger() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
