//! Trigger parsing for commands and button callbacks.

use thiserror::Error;

use crate::domain::REFRESH_TRIGGER;

/// Supported slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Rates,
    Help,
}

/// Supported inline button actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Re-fetch rates and replace the pressed message.
    Refresh,
}

/// Parse error for command messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("message is not a command")]
    NotACommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}

/// Parse a chat message into a bot command.
///
/// Accepts a trailing `@bot_name` and ignores arguments.
pub fn parse_command(text: &str) -> Result<BotCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(BotCommand::Start),
        "/rates" => Ok(BotCommand::Rates),
        "/help" => Ok(BotCommand::Help),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Parse inline button callback data.
#[must_use]
pub fn parse_callback(data: &str) -> Option<ButtonAction> {
    (data == REFRESH_TRIGGER).then_some(ButtonAction::Refresh)
}

/// Bot commands for the platform's command menu.
///
/// Returns tuples of (command, description).
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Приветствие"),
        ("rates", "Курс USDT"),
        ("help", "Справка"),
    ]
}
