//! Handler for `check config`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration and print a summary.
pub fn execute_config(config_path: &Path) -> Result<()> {
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "defaults (file not found)".to_string()
    };
    let config = Config::load_or_default(config_path)?;

    output::section("Config Check");
    output::field("Source", source);
    output::field("P2P endpoint", &config.p2p.endpoint);
    output::field(
        "P2P pair",
        format!(
            "{}/{} ({} rows)",
            config.p2p.token, config.p2p.currency, config.p2p.rows
        ),
    );
    output::field("Ticker", &config.ticker.endpoint);
    output::field("Symbols", config.ticker.symbols.join(", "));
    output::field("OTC endpoint", &config.ticker.otc_endpoint);
    output::field("HTTP timeout", format!("{}s", config.http.timeout_secs));
    output::field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );

    match config.telegram.masked_token() {
        Some(token) => output::field("Bot token", token),
        None => output::warning("bot token not set (TELEGRAM_BOT_TOKEN or BOT_TOKEN)"),
    }
    output::success("configuration is valid");
    Ok(())
}
