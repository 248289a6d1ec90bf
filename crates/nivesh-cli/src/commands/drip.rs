//! DRIP enrollment commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use nivesh_core::config::{self, DripSettings, env_lookup};
use nivesh_core::domain::DripCheckRequest;

use crate::output;

#[derive(Args, Debug)]
pub struct DripCommand {
    #[command(subcommand)]
    pub command: DripSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DripSubcommand {
    /// Check DRIP enrollment status for a user/scheme pair
    Check(CheckArgs),

    /// Create a DRIP enrollment from the configured enrollee details
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scheme id (falls back to VAULT_SCHEME)
    #[arg(long)]
    pub scheme: Option<i64>,

    /// User id (falls back to VAULT_USER)
    #[arg(long)]
    pub user: Option<i64>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {}

pub async fn handle(cmd: DripCommand) -> Result<()> {
    match cmd.command {
        DripSubcommand::Check(args) => run_check(args).await,
        DripSubcommand::Create(args) => run_create(args).await,
    }
}

async fn run_check(args: CheckArgs) -> Result<()> {
    let settings = super::api_settings(None, None, None)?;

    // Only the two identifiers are needed here; the full enrollee
    // configuration is reserved for `drip create`.
    let scheme = match args.scheme {
        Some(scheme) => scheme,
        None => config::required_i64(&env_lookup, config::VAULT_SCHEME)?,
    };
    let user = match args.user {
        Some(user) => user,
        None => config::required_i64(&env_lookup, config::VAULT_USER)?,
    };

    let session = super::login(&settings).await?;
    let response = session
        .check_drip(&DripCheckRequest { scheme, user })
        .await
        .context("DRIP check failed")?;

    output::success("DRIP status retrieved");
    println!();
    output::field("Enrolled", &response.is_enabled.to_string());
    output::field("User id", &response.drip.user_id.to_string());
    output::json_pretty(&response)?;

    Ok(())
}

async fn run_create(_args: CreateArgs) -> Result<()> {
    let settings = super::api_settings(None, None, None)?;
    let drip = DripSettings::from_env()?;

    let session = super::login(&settings).await?;
    let status = session
        .create_drip(&drip.create_request())
        .await
        .context("DRIP creation failed")?;

    if status != 201 {
        tracing::warn!(status, "expected HTTP 201 from enrollment creation");
    }

    output::success("DRIP enrollment created");
    println!();
    output::field("Status", &status.to_string());

    Ok(())
}
