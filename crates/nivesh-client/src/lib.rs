//! nivesh-client - HTTP client for the Nivesh mutual-fund services API.
//!
//! This library provides the authenticated session and typed domain calls
//! used by the end-to-end suites. All authenticated operations flow through
//! a [`Session`] obtained from a login exchange; there is no shared or
//! process-global session state.
//!
//! # Example
//!
//! ```no_run
//! use nivesh_client::Session;
//! use nivesh_core::config::{ApiSettings, DripSettings};
//!
//! # async fn example() -> nivesh_core::Result<()> {
//! let api = ApiSettings::from_env()?;
//! let drip = DripSettings::from_env()?;
//!
//! let session = Session::login(&api.base_url, &api.credentials).await?;
//! let enrollment = session.check_drip(&drip.check_request()).await?;
//!
//! println!("enrolled: {}", enrollment.is_enabled);
//! # Ok(())
//! # }
//! ```

mod drips;
mod endpoints;
mod payments;
mod rest;
mod session;

pub use session::{Session, TokenFields};
