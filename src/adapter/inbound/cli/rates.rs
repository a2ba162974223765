//! Handler for the `rates` command.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Fetch both quotes once and print the plain-text report.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    config.init_logging();

    let report = bootstrap::render_once(&config).await?;
    output::payload(&report);
    Ok(())
}
