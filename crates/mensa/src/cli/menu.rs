//! Menu CLI commands.

use clap::{Parser, Subcommand};

/// Menu override and weekly template commands.
#[derive(Debug, Parser)]
pub struct MenuCommand {
    #[command(subcommand)]
    pub action: MenuAction,
}

/// Available menu actions.
#[derive(Debug, Subcommand)]
pub enum MenuAction {
    /// Get the override for a date, without template fallback.
    Get {
        /// Date key (YYYY-MM-DD).
        date: String,
    },
    /// Resolve the menu to display for a date (override, then weekly).
    Resolve {
        /// Date key (YYYY-MM-DD).
        date: String,
    },
    /// Set the override for a date.
    Set {
        /// Date key (YYYY-MM-DD).
        date: String,
        /// The day's menu as JSON.
        menu: String,
    },
    /// Clear the override for a date.
    Clear {
        /// Date key (YYYY-MM-DD).
        date: String,
    },
    /// Print the weekly template.
    Weekly,
    /// Replace the weekly template as a whole.
    SetWeekly {
        /// The full template as JSON, keyed by weekday (0 = Sunday).
        template: String,
    },
}
