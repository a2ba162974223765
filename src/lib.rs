//! Ratebot - USDT exchange-rate reporting over Telegram.
//!
//! On request the bot fetches a Bybit P2P quote (USDT/RUB by default) and an
//! HTX ticker quote (USDT/CNY by default), renders both into one message and
//! attaches a refresh button.
//!
//! # Architecture
//!
//! - **`domain`** - Quotes, the composed report and chat message hints
//! - **`port`** - Outbound traits: JSON transport, rate sources, chat surface
//! - **`adapter::outbound`** - Reqwest transport, Bybit P2P and HTX sources
//! - **`adapter::inbound`** - CLI and Telegram dispatcher
//! - **`application`** - Report composition/rendering and bot command handling
//! - **`infrastructure`** - Configuration, logging and runtime wiring
//!
//! # Features
//!
//! - `telegram` (default) - Telegram bot support via teloxide
//! - `testkit` - Scripted transport, static sources and a recording chat
//!   surface for tests
//!
//! # Example
//!
//! ```no_run
//! use ratebot::domain::TextFormat;
//! use ratebot::infrastructure::bootstrap;
//! use ratebot::infrastructure::config::settings::Config;
//!
//! # async fn demo() -> ratebot::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let transport = bootstrap::build_transport(&config)?;
//! let composer = bootstrap::build_composer(&config, transport);
//! println!("{}", composer.render(TextFormat::Plain).await);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
