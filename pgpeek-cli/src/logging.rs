//! Logging setup for the `pgpeek` binary.
//!
//! Log records go to stderr so they never mix with command output.
//!
//! # Environment Variables
//!
//! - `PGPEEK_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific log level
//! - `PGPEEK_DEBUG=true|1|yes` - Enable debug logging
//! - `PGPEEK_LOG_FORMAT=json|pretty|compact` - Set output format (default: compact)
//!
//! `PGPEEK_LOG_LEVEL` wins over `-v` flags, which win over the debug switches.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `PGPEEK_DEBUG`.
pub fn is_debug_enabled() -> bool {
    env::var("PGPEEK_DEBUG")
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_level(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Pick the log level.
///
/// `env_level` is the raw `PGPEEK_LOG_LEVEL` value, `verbosity` the number
/// of `-v` flags and `debug` whether any debug switch is on.
pub fn resolve_level(env_level: Option<&str>, verbosity: u8, debug: bool) -> &'static str {
    if let Some(level) = env_level.and_then(parse_level) {
        return level;
    }
    match verbosity {
        0 if debug => "debug",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the output format from a raw `PGPEEK_LOG_FORMAT` value.
pub fn resolve_format(value: Option<&str>) -> &'static str {
    match value.map(str::to_lowercase).as_deref() {
        Some("json") => "json",
        Some("pretty") => "pretty",
        _ => "compact",
    }
}

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn init(verbosity: u8, config_debug: bool) {
    INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let env_level = env::var("PGPEEK_LOG_LEVEL").ok();
        let level = resolve_level(
            env_level.as_deref(),
            verbosity,
            config_debug || is_debug_enabled(),
        );
        let format = resolve_format(env::var("PGPEEK_LOG_FORMAT").ok().as_deref());

        let filter = EnvFilter::try_new(format!(
            "pgpeek={},pgpeek_cli={},pgpeek_conn={},tokio_postgres=warn",
            level, level, level
        ))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

        let layer = fmt::layer().with_writer(std::io::stderr);
        match format {
            "json" => tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init(),
            "pretty" => tracing_subscriber::registry()
                .with(filter)
                .with(layer.pretty())
                .init(),
            _ => tracing_subscriber::registry()
                .with(filter)
                .with(layer.compact())
                .init(),
        }

        tracing::debug!(level, format, "pgpeek logging initialized");
    });
}
