//! Terminal output formatting for CLI handlers.
//!
//! Styling goes through `owo-colors` and honors the `--color` choice; quiet
//! mode suppresses everything except warnings, errors and command payloads.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "ratebot".if_supports_color(Stream::Stdout, |text| text.bold()),
        version.if_supports_color(Stream::Stdout, |text| text.dimmed())
    );
    println!();
}

/// Print a section header.
pub fn section(title: &str) {
    if is_quiet() {
        return;
    }
    println!(
        "{}",
        title.if_supports_color(Stream::Stdout, |text| text.bold())
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if is_quiet() {
        return;
    }
    let label = format!("{label:<14}");
    println!(
        "  {} {}",
        label.if_supports_color(Stream::Stdout, |text| text.dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |text| text.green()),
        message
    );
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!(
        "  {} {}",
        "⚠".if_supports_color(Stream::Stdout, |text| text.yellow()),
        message
    );
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |text| text.red()),
        message
    );
}

/// Print command payload verbatim; shown even in quiet mode.
pub fn payload(text: &str) {
    println!("{text}");
}

/// Print a blank line.
pub fn blank() {
    if !is_quiet() {
        println!();
    }
}
