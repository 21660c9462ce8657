//! Logging setup
//!
//! The library only emits `log` records; the binary installs an
//! `env_logger` backend writing to stderr, keeping stdout for the report.

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Resolve the log level: explicit value, then `RUST_LOG`, then `warn`
pub fn resolve_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|v| v.parse::<LevelFilter>().ok())
        })
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize the logger
///
/// # Example
///
/// ```rust
/// couette_verify::logging::init_logging(Some("debug"));
/// ```
pub fn init_logging(level: Option<&str>) {
    let log_level = resolve_level(level);

    let _ = Builder::new()
        .filter_level(log_level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(resolve_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(Some("TRACE")), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Some("info"));
        init_logging(Some("debug"));
        log::info!("logger initialised");
    }
}
