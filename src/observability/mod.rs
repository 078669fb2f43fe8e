//! Logging initialization.
//!
//! Structured logging through `tracing`, configured from the
//! environment:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `HOMEROOM_LOG` | an `EnvFilter` directive | `homeroom=info` |
//! | `HOMEROOM_LOG_FORMAT` | `text`, `json` | `text` |

use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line text.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format string, defaulting to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homeroom=info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Builds configuration from `HOMEROOM_LOG` / `HOMEROOM_LOG_FORMAT`,
    /// with `verbose` lowering the default filter to debug.
    #[must_use]
    pub fn from_env(verbose: bool) -> Self {
        let default_filter = if verbose {
            "homeroom=debug"
        } else {
            "homeroom=info"
        };
        let filter =
            std::env::var("HOMEROOM_LOG").unwrap_or_else(|_| default_filter.to_string());
        let format = std::env::var("HOMEROOM_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();
        Self { filter, format }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `Error::OperationFailed` if the filter directive is invalid
/// or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|e| Error::OperationFailed {
            operation: "logging_init".to_string(),
            cause: format!("bad filter {:?}: {e}", config.filter),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| Error::OperationFailed {
        operation: "logging_init".to_string(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Text);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "homeroom=info");
        assert_eq!(config.format, LogFormat::Text);
    }
}
