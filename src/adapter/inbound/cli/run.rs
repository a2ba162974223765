//! Handler for the `run` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(config_path: &Path, args: &RunArgs) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;
    apply_overrides(&mut config, args);

    if !args.json_logs {
        print_startup_config(&config);
    }

    config.init_logging();
    bootstrap::run_bot(&config).await
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }
}

fn print_startup_config(config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "P2P",
        format!("{}/{}", config.p2p.token, config.p2p.currency),
    );
    output::field("Ticker", config.ticker.symbols.join(", "));
    output::field("Timeout", format!("{}s", config.http.timeout_secs));
    match config.telegram.masked_token() {
        Some(token) => output::field("Bot token", token),
        None => output::warning("bot token not set (TELEGRAM_BOT_TOKEN)"),
    }
    output::blank();
}
