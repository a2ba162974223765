//! Chat bot use cases.
//!
//! Maps user commands and button presses onto rate reports, independent of
//! any chat platform. Platform adapters parse updates into calls on
//! [`BotController`] and implement [`ChatSurface`](crate::port::ChatSurface).

mod command;
mod controller;
pub mod text;

pub use command::{bot_commands, parse_callback, parse_command, BotCommand, ButtonAction, CommandParseError};
pub use controller::BotController;
