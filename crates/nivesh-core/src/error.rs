//! Error types for the Nivesh client and test suite.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, authentication, rejected requests, and transport failures,
//! so failure logs can tell "server said no" apart from "server unreachable".

use std::fmt;
use thiserror::Error;

/// The unified error type for Nivesh operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (missing or malformed environment values).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication errors (login rejected, malformed login response).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A domain call returned an unexpected status or malformed body.
    #[error("request error: {0}")]
    Api(#[from] ApiError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration errors, detected eagerly before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration variable is absent or empty.
    #[error("missing required configuration variable {name}")]
    MissingVar { name: String },

    /// A configuration variable is present but malformed.
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: String, reason: String },

    /// The base URL is present but not usable.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Authentication-related errors from the login exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server rejected the login attempt with a non-200 status.
    /// Carries the status code and raw response body for diagnostics.
    #[error("login rejected: HTTP {status}: {body}")]
    LoginRejected { status: u16, body: String },

    /// The server answered 200 but the body is missing the token fields.
    #[error("malformed login response: {body}")]
    MalformedResponse { body: String },
}

/// A rejected domain call: unexpected status or malformed body.
///
/// The raw response body is always kept so failing tests can report the
/// payload for triage, never a bare error string alone.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error code from the server body (if present).
    pub error: Option<String>,
    /// Error message from the server body (if present).
    pub message: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>, body: String) -> Self {
        Self {
            status,
            error,
            message,
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        } else if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Transport-level errors: no usable response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Other transport-level HTTP failure.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl TransportError {
    /// Whether the failure is worth the single bounded retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TransportError::Connection { .. } | TransportError::Timeout
        )
    }
}
