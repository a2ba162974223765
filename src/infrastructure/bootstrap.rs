//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::bybit::BybitP2p;
use crate::adapter::outbound::htx::HtxTicker;
use crate::adapter::outbound::http::ReqwestTransport;
use crate::application::report::ReportComposer;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::JsonTransport;

/// Build the shared HTTP transport from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_transport(config: &Config) -> Result<Arc<dyn JsonTransport>> {
    let transport = ReqwestTransport::new(config.http.timeout(), &config.http.user_agent)?;
    Ok(Arc::new(transport))
}

/// Wire both rate sources over `transport` into a report composer.
#[must_use]
pub fn build_composer(config: &Config, transport: Arc<dyn JsonTransport>) -> ReportComposer {
    let p2p = BybitP2p::new(Arc::clone(&transport), config.p2p.clone());
    let ticker = HtxTicker::new(transport, config.ticker.clone());
    ReportComposer::new(Arc::new(p2p), Arc::new(ticker))
}

/// Fetch and render a single plain-text report.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub async fn render_once(config: &Config) -> Result<String> {
    let composer = build_composer(config, build_transport(config)?);
    Ok(composer.render(crate::domain::TextFormat::Plain).await)
}

/// Run the Telegram bot until shutdown.
///
/// # Errors
///
/// Returns an error if the bot token is missing or the HTTP client cannot
/// be constructed.
#[cfg(feature = "telegram")]
pub async fn run_bot(config: &Config) -> Result<()> {
    use crate::adapter::inbound::telegram::{self, TelegramSurface};

    let token = config.require_bot_token()?;
    let composer = build_composer(config, build_transport(config)?);
    let bot = teloxide::Bot::new(token);
    let surface = Arc::new(TelegramSurface::new(bot.clone()));
    let controller = crate::application::bot::BotController::new(composer, surface);

    info!(
        p2p = %config.p2p.endpoint,
        ticker = %config.ticker.endpoint,
        symbols = ?config.ticker.symbols,
        "Starting rate bot"
    );
    telegram::run(bot, controller, config.telegram.register_commands).await;
    Ok(())
}

/// Run the Telegram bot until shutdown (non-telegram build).
///
/// # Errors
///
/// Always returns a configuration error.
#[cfg(not(feature = "telegram"))]
pub async fn run_bot(_config: &Config) -> Result<()> {
    info!("Telegram support not compiled in");
    Err(crate::error::ConfigError::InvalidValue {
        field: "telegram",
        reason: "built without the `telegram` feature".to_string(),
    }
    .into())
}
