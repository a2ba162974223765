//! Telegram bot configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram bot configuration.
///
/// The bot token is never read from the file; it is taken from the
/// environment when the config is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Register the command menu on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
    /// Bot API token obtained from BotFather.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl TelegramAppConfig {
    /// Token with all but the first and last four characters hidden.
    #[must_use]
    pub fn masked_token(&self) -> Option<String> {
        self.bot_token.as_deref().map(mask_token)
    }
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            register_commands: default_true(),
            bot_token: None,
        }
    }
}
