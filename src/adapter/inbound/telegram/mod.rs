//! Telegram bot frontend.
//!
//! Translates Telegram updates into
//! [`BotController`](crate::application::bot::BotController) calls and
//! implements [`ChatSurface`](crate::port::ChatSurface) on top of a teloxide
//! [`Bot`](teloxide::Bot).
//!
//! Requires the `telegram` feature to be enabled.

mod dispatch;
mod surface;

pub use dispatch::run;
pub use surface::TelegramSurface;
