//! Ticket CLI commands.

use clap::{Parser, Subcommand};

/// Redemption ticket commands.
#[derive(Debug, Parser)]
pub struct TicketsCommand {
    #[command(subcommand)]
    pub action: TicketsAction,
}

/// Available ticket actions.
#[derive(Debug, Subcommand)]
pub enum TicketsAction {
    /// List all tickets.
    List,
    /// List tickets belonging to one user.
    ListUser {
        /// User id.
        user_id: String,
    },
    /// Create a ticket for a user.
    Create {
        /// User id the ticket belongs to.
        #[arg(long)]
        user_id: String,
        /// Extra ticket fields as a JSON object (meal, price, ...).
        #[arg(long)]
        extra: Option<String>,
    },
    /// Mark a ticket as used.
    MarkUsed {
        /// Ticket id.
        id: String,
    },
}
