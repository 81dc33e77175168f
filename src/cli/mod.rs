// ABOUTME: CLI argument parsing and command routing for quetico-onboarding
//
// Provides command-line interface for:
// - Running the onboarding wizard (tui, default)
// - Printing the step catalog (steps)

pub mod steps;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Onboarding guide for new Quetico 3PL customers
#[derive(Parser)]
#[command(name = "quetico-onboarding")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use a custom step catalog (TOML)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the onboarding wizard (default if no command given)
    Tui,

    /// Print the onboarding steps
    Steps,
}
