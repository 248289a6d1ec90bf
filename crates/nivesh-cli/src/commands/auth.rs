//! Authentication commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::output;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and verify the configured credential set
    Login(LoginArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// API base URL (falls back to BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Client BOID (falls back to LOGIN_BOID)
    #[arg(long)]
    pub boid: Option<String>,

    /// Account password (falls back to LOGIN_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,
}

pub async fn handle(cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => run_login(args).await,
    }
}

async fn run_login(args: LoginArgs) -> Result<()> {
    let settings = super::api_settings(
        args.base_url.as_deref(),
        args.boid.as_deref(),
        args.password.as_deref(),
    )?;

    let session = super::login(&settings).await?;

    // The token itself is never printed; its length is enough to confirm
    // the exchange worked.
    output::success("Logged in successfully");
    println!();
    output::field("BOID", settings.credentials.boid());
    output::field(
        "Access token",
        &format!("{} characters", session.access_token().as_str().len()),
    );
    output::field(
        "Refresh token",
        if session.refresh_token().is_some() {
            "present"
        } else {
            "absent"
        },
    );

    Ok(())
}
