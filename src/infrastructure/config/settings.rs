//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with the bot token taken from the
//! `TELEGRAM_BOT_TOKEN` (or `BOT_TOKEN`) environment variable.
//!
//! # Example
//!
//! ```no_run
//! use ratebot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::bybit::BybitP2pConfig;
use crate::adapter::outbound::htx::HtxConfig;
use crate::error::{ConfigError, Result};

/// Environment variables holding the bot token, in lookup order.
pub const BOT_TOKEN_VARS: [&str; 2] = ["TELEGRAM_BOT_TOKEN", "BOT_TOKEN"];

/// Main application configuration.
///
/// Built once at startup and shared read-only. Every section is optional in
/// the file; missing sections take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram bot configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Outbound HTTP settings shared by both rate sources.
    #[serde(default)]
    pub http: HttpConfig,

    /// Bybit P2P rate source.
    #[serde(default)]
    pub p2p: BybitP2pConfig,

    /// HTX ticker rate source.
    #[serde(default)]
    pub ticker: HtxConfig,
}

impl Config {
    /// Parse and validate configuration from TOML content, without touching
    /// the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML content and read the bot token from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config = Self::from_toml_str(content)?;
        config.telegram.bot_token = bot_token_from_env();
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, using defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load) when the file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// The bot token, required to run the bot.
    ///
    /// # Errors
    ///
    /// Returns an error if no token environment variable is set.
    pub fn require_bot_token(&self) -> Result<&str> {
        self.telegram.bot_token.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "TELEGRAM_BOT_TOKEN",
            }
            .into()
        })
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        validate_url("p2p.endpoint", &self.p2p.endpoint)?;
        validate_url("ticker.endpoint", &self.ticker.endpoint)?;
        validate_url("ticker.otc_endpoint", &self.ticker.otc_endpoint)?;

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: e.to_string(),
            }
            .into());
        }

        validate_code("p2p.token", &self.p2p.token)?;
        validate_code("p2p.currency", &self.p2p.currency)?;
        validate_code("ticker.currency", &self.ticker.currency)?;

        if self.p2p.rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "p2p.rows",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.ticker.symbols.is_empty() {
            return Err(ConfigError::MissingField {
                field: "ticker.symbols",
            }
            .into());
        }
        if self.ticker.symbols.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "ticker.symbols",
                reason: "symbols must not be blank".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn bot_token_from_env() -> Option<String> {
    BOT_TOKEN_VARS
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn validate_url(field: &'static str, value: &str) -> Result<()> {
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme `{}`", url.scheme()),
        }
        .into()),
        Err(e) => Err(ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()),
    }
}

fn validate_code(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("`{value}` is not an alphabetic code"),
        }
        .into());
    }
    Ok(())
}
