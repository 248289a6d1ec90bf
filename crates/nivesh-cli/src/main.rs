//! nivesh - CLI for exercising the Nivesh services API.
//!
//! This is a thin wrapper over the `nivesh-client` library, intended for
//! manual exploration and debugging against a live environment. Every
//! command performs its own login, mirroring how the end-to-end suites run.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{auth, drip, khalti};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    // Pick up a .env file if one is present, as the test environments do.
    let _ = dotenvy::dotenv();

    match cli.command {
        Commands::Auth(cmd) => auth::handle(cmd).await,
        Commands::Khalti(cmd) => khalti::handle(cmd).await,
        Commands::Drip(cmd) => drip::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
