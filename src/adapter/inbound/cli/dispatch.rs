//! Routing of parsed command lines to their handlers.

use super::command::{CheckCommand, Cli, Commands};
use super::{check, output, rates, run};
use crate::error::Result;

/// Apply global flags and run the selected subcommand.
///
/// # Errors
///
/// Returns the handler's error; the binary reports it and exits non-zero.
pub async fn execute(cli: &Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.quiet));
    cli.color.apply();

    match &cli.command {
        Commands::Run(args) => run::execute(&cli.config, args).await,
        Commands::Rates => rates::execute(&cli.config).await,
        Commands::Check(CheckCommand::Config) => check::execute_config(&cli.config),
    }
}
