//! Command-line interface definitions.
//!
//! Defines the CLI structure for the ratebot application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telegram bot reporting USDT rates from Bybit P2P and HTX
#[derive(Parser, Debug)]
#[command(name = "ratebot")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Apply this choice to all `owo-colors` styling in the process.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

/// Top-level subcommands for the ratebot CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (long polling, stops on Ctrl-C)
    Run(RunArgs),

    /// Fetch the rates once and print the report
    Rates,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for `ratebot run`.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Override the configured log level (e.g. debug, info, warn)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Subcommands for `ratebot check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and print a summary
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "ratebot");
    }

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["ratebot", "run"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(!cli.quiet);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.log_level.is_none());
                assert!(!args.json_logs);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "ratebot",
            "run",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["ratebot", "rates", "--config", "bot.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("bot.toml"));
        assert!(matches!(cli.command, Commands::Rates));
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["ratebot", "-q", "check", "config"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Config)));
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["ratebot", "--color", "never", "rates"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_color_choice_default_is_auto() {
        assert!(matches!(ColorChoice::default(), ColorChoice::Auto));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["ratebot"]).is_err());
    }

    #[test]
    fn test_unknown_check_target_is_an_error() {
        assert!(Cli::try_parse_from(["ratebot", "check", "telegram"]).is_err());
    }
}
