//! Subcommand implementations.

pub mod auth;
pub mod drip;
pub mod khalti;

use anyhow::{Context, Result};
use colored::Colorize;

use nivesh_client::Session;
use nivesh_core::config::{self, ApiSettings};

/// Resolve API settings, letting command-line flags override the environment.
pub(crate) fn api_settings(
    base_url: Option<&str>,
    boid: Option<&str>,
    password: Option<&str>,
) -> Result<ApiSettings> {
    let settings = ApiSettings::from_lookup(|name| {
        let flag = match name {
            config::BASE_URL => base_url,
            config::LOGIN_BOID => boid,
            config::LOGIN_PASSWORD => password,
            _ => None,
        };
        flag.map(str::to_string)
            .or_else(|| std::env::var(name).ok())
    })?;

    Ok(settings)
}

/// Perform the per-command login; every command obtains its own session.
pub(crate) async fn login(settings: &ApiSettings) -> Result<Session> {
    eprintln!("{}", "Logging in...".dimmed());

    Session::login(&settings.base_url, &settings.credentials)
        .await
        .context("Failed to login")
}
