//! Line gauge inspection CLI
//!
//! Normalizes card configs, resolves them against a state snapshot and
//! composes text styles, printing JSON on stdout. Logs go to stderr; set
//! `DEBUG_LOGGING=1` to see every fallback normalization takes.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use gauge_types::TextStyle;

use crate::commands::{CommandError, error_chain};

#[derive(Parser, Debug)]
#[command(name = "line-gauge")]
#[command(about = "Inspect line gauge configurations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the fully defaulted configuration
    Normalize {
        /// Card config (.json or .toml)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Resolve a config against entity states and print the render plan
    Resolve {
        /// Card config (.json or .toml)
        #[arg(short, long)]
        config: PathBuf,

        /// JSON map of entity id to { state, attributes }
        #[arg(short, long)]
        states: PathBuf,

        /// JSON map of entity id to baseline statistic, for the delta
        #[arg(long)]
        statistics: Option<PathBuf>,

        /// Evaluate as of this time (RFC 3339) instead of now
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Compose CSS declarations for text style flags
    Style {
        /// Flags such as weight-bold or shadow-neon
        #[arg(required = true, value_parser = parse_text_style)]
        flags: Vec<TextStyle>,

        /// Base color used by the neon glow
        #[arg(long)]
        color: Option<String>,

        /// Print a CSS declaration block instead of JSON
        #[arg(long)]
        css: bool,
    },

    /// Show or change the saved theme variables
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Set a theme variable, e.g. `theme set primary-color "#FF9800"`
    Set { name: String, value: String },
    /// Restore the stock theme
    Reset,
}

fn parse_text_style(text: &str) -> Result<TextStyle, String> {
    use gauge_types::ClosedSet;

    TextStyle::parse(text).ok_or_else(|| {
        let valid: Vec<&str> = TextStyle::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown text style '{text}' (expected one of: {})", valid.join(", "))
    })
}

fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Normalize { config } => commands::show_normalized(&config),
        Commands::Resolve {
            config,
            states,
            statistics,
            now,
        } => commands::show_render_plan(&config, &states, statistics.as_deref(), now),
        Commands::Style { flags, color, css } => commands::show_style(&flags, color.as_deref(), css),
        Commands::Theme { action: None } => commands::show_theme(),
        Commands::Theme {
            action: Some(ThemeAction::Set { name, value }),
        } => commands::set_theme_variable(&name, &value),
        Commands::Theme {
            action: Some(ThemeAction::Reset),
        } => commands::reset_theme(),
    }
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}
