//! Tracing subscriber initialization.
//!
//! Console logging over `tracing-subscriber` with an env-filter level
//! directive and a configurable output format.

use crate::config::LoggerSettings;
use anyhow::Context;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Default human-readable format
    Full,
    /// Single-line compact format
    Compact,
    /// Structured JSON, one event per line
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("unknown log format: {}", other)),
        }
    }
}

/// Install the global subscriber from logger settings.
///
/// The `level` field accepts any env-filter directive, e.g. `info` or
/// `bookstore_manager=debug,info`.
pub fn init(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.level)
        .with_context(|| format!("invalid log level directive: {}", settings.level))?;
    let format = LogFormat::from_str(&settings.format)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    match format {
        LogFormat::Full => builder.init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(LogFormat::from_str("full").unwrap(), LogFormat::Full);
        assert_eq!(LogFormat::from_str("COMPACT").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("Json").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("pretty-ish").is_err());
    }

    #[test]
    fn test_invalid_level_directive_rejected() {
        let settings = LoggerSettings {
            level: "not a directive!!".to_string(),
            format: "full".to_string(),
            colored: false,
        };
        assert!(init(&settings).is_err());
    }
}
