//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::drip::DripCommand;
use crate::commands::khalti::KhaltiCommand;

/// CLI for the Nivesh mutual-fund services API.
#[derive(Parser, Debug)]
#[command(name = "nivesh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authentication operations
    Auth(AuthCommand),

    /// Khalti payment gateway operations
    Khalti(KhaltiCommand),

    /// DRIP enrollment operations
    Drip(DripCommand),
}
