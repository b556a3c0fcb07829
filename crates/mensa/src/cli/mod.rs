//! CLI command definitions.

pub mod menu;
pub mod tickets;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// Administration CLI for the mensa blob store.
#[derive(Debug, Parser)]
#[command(name = "mensa")]
#[command(about = "Administration CLI for the mensa blob store", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output.
    Json,
    /// Indented JSON output.
    #[default]
    Pretty,
}

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    let result = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    result.unwrap_or_default()
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User account management.
    Users(users::UsersCommand),
    /// Redemption ticket management.
    Tickets(tickets::TicketsCommand),
    /// Menu overrides and weekly template.
    Menu(menu::MenuCommand),
}
