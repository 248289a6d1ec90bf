//! Khalti payment gateway commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use nivesh_core::config::KhaltiSettings;

use crate::output;

#[derive(Args, Debug)]
pub struct KhaltiCommand {
    #[command(subcommand)]
    pub command: KhaltiSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum KhaltiSubcommand {
    /// Initiate a SIP payment using the configured payload
    Initiate(InitiateArgs),
}

#[derive(Args, Debug)]
pub struct InitiateArgs {
    /// Payment amount, overriding the configured payload
    #[arg(long)]
    pub amount: Option<u64>,

    /// SIP start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub async fn handle(cmd: KhaltiCommand) -> Result<()> {
    match cmd.command {
        KhaltiSubcommand::Initiate(args) => run_initiate(args).await,
    }
}

async fn run_initiate(args: InitiateArgs) -> Result<()> {
    let settings = super::api_settings(None, None, None)?;
    let khalti = KhaltiSettings::from_env()?;

    let mut request = khalti.payload;
    if let Some(amount) = args.amount {
        request.amount = amount;
    }

    // Configured payloads carry a fixed date; stamp the requested or
    // current day before sending.
    let start_date = args
        .start_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let request = request.with_start_date(start_date);

    let session = super::login(&settings).await?;
    let response = session
        .initiate_khalti(&request)
        .await
        .context("Khalti initiation failed")?;

    output::success("Khalti payment initiated");
    println!();
    output::field("pidx", &response.pidx);
    output::field("Payment URL", &response.payment_url);
    output::field("Expires at", &response.expires_at);
    output::field("Expires in", &format!("{}s", response.expires_in));

    Ok(())
}
