//! `[logging]` section and tracing subscriber setup.

use std::fmt;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration.
///
/// `level` is an `EnvFilter` directive, so both `debug` and
/// `ratebot=debug,reqwest=warn` are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".into()
}

impl LoggingConfig {
    /// Filter used by [`init`](Self::init): `RUST_LOG` when set and valid,
    /// the configured directive otherwise.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the configured directive.
    pub fn filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level),
        }
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// A subscriber installed earlier in the process is left in place.
    pub fn init(&self) {
        let filter = self
            .filter()
            .unwrap_or_else(|_| EnvFilter::new(default_level()));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let installed = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
        if installed.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_pretty() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn format_parses_lowercase_names() {
        let config: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert_eq!(config.format.to_string(), "json");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(toml::from_str::<LoggingConfig>("format = \"xml\"").is_err());
    }

    #[test]
    fn per_target_directives_are_valid_levels() {
        let config = LoggingConfig {
            level: "ratebot=debug,reqwest=warn".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(EnvFilter::try_new(&config.level).is_ok());
    }

    #[test]
    fn repeated_init_does_not_panic() {
        let config = LoggingConfig::default();
        config.init();
        config.init();
    }
}
