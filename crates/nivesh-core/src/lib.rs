//! nivesh-core - Core types for the Nivesh API client and test suite.

pub mod config;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::{ApiError, AuthError, ConfigError, Error, TransportError};
pub use tokens::{AccessToken, RefreshToken};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
