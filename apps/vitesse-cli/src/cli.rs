//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "vitesse", version, about = "Track recruitment candidates from the terminal")]
pub struct Cli {
    /// API origin (overrides VITESSE_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Login email (overrides VITESSE_EMAIL).
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Login password (overrides VITESSE_PASSWORD).
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the credentials and report the account role.
    Login,

    /// Create a new account.
    Register(RegisterArgs),

    /// List candidates, optionally filtered.
    List(ListArgs),

    /// Show one candidate in full.
    Show { id: Uuid },

    /// Add a candidate.
    Add(AddArgs),

    /// Edit a candidate (admin only).
    Edit(EditArgs),

    /// Toggle the favorite flag (admin only).
    Favorite { id: Uuid },

    /// Delete a candidate.
    Delete { id: Uuid },
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// Email of the new account.
    #[arg(long = "account-email")]
    pub account_email: String,
    /// Password of the new account.
    #[arg(long = "account-password")]
    pub account_password: String,
    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Match against first and last name, case-insensitive.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only show favorites.
    #[arg(long)]
    pub favorites: bool,

    /// Print the matching candidates as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long = "candidate-email")]
    pub candidate_email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
}

/// Fields left out are unchanged. An empty value clears an optional field.
#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: Uuid,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long = "candidate-email")]
    pub candidate_email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
}
