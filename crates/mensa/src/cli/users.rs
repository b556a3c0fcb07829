//! User CLI commands.

use clap::{Parser, Subcommand};

/// User account commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all user accounts.
    List,
    /// Find an account by email (case-insensitive).
    Find {
        /// Email address.
        email: String,
    },
    /// Register a new account.
    Register {
        /// Email address.
        #[arg(long)]
        email: String,
        /// Password (stored as an opaque string).
        #[arg(long)]
        password: String,
        /// Display name.
        #[arg(long)]
        name: String,
    },
    /// Set the balance of an account.
    SetBalance {
        /// User id.
        id: String,
        /// New balance.
        balance: f64,
    },
}
