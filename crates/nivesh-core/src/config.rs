//! Typed configuration resolved from environment-style variables.
//!
//! Every value the suite needs is declared here with an explicit policy:
//! [`required`] fails with a [`ConfigError`] naming the variable, and numeric
//! fields are parsed strictly, so a malformed or absent value surfaces at
//! load time rather than as a silent sentinel mid-test. There are no
//! hardcoded fallback ids.
//!
//! Settings are split into sections so each caller resolves only what it
//! needs: a login-only flow must not fail because a payment payload is
//! unset. Resolution goes through an injectable lookup so tests never mutate
//! the process environment.

use std::fmt;

use crate::credentials::Credentials;
use crate::domain::KhaltiInitiateRequest;
use crate::error::ConfigError;
use crate::types::ApiUrl;

/// API base URL.
pub const BASE_URL: &str = "BASE_URL";
/// Login identifier (BOID).
pub const LOGIN_BOID: &str = "LOGIN_BOID";
/// Login password.
pub const LOGIN_PASSWORD: &str = "LOGIN_PASSWORD";
/// Current password for the change-password flow.
pub const CURRENT_PASSWORD: &str = "CURRENT_PASSWORD";
/// New password for the change-password flow.
pub const CHANGE_PASSWORD: &str = "CHANGE_PASSWORD";
/// Confirmation of the new password.
pub const CONFIRM_PASSWORD: &str = "CONFIRM_PASSWORD";
/// DRIP scheme id.
pub const VAULT_SCHEME: &str = "VAULT_SCHEME";
/// DRIP user id.
pub const VAULT_USER: &str = "VAULT_USER";
/// DRIP enrollee name.
pub const VAULT_NAME: &str = "VAULT_NAME";
/// DRIP enrollee mobile number.
pub const VAULT_MOBILE: &str = "VAULT_MOBILE";
/// Depository participant.
pub const VAULT_DP: &str = "VAULT_DP";
/// DP client id.
pub const VAULT_CLIENT_ID: &str = "VAULT_CLIENT_ID";
/// BOID used for DRIP enrollment.
pub const VAULT_BOID: &str = "VAULT_BOID";
/// Khalti SIP payment payload, as a JSON document.
pub const KHALTI_SIP_PAYLOAD: &str = "KHALTI_SIP_PAYLOAD";

/// Resolve a required variable; empty values count as missing.
pub fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar {
            name: name.to_string(),
        }),
    }
}

/// Resolve a required variable and parse it as an integer.
pub fn required_i64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<i64, ConfigError> {
    let raw = required(lookup, name)?;
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar {
            name: name.to_string(),
            reason: format!("expected an integer, got '{}'", raw),
        })
}

/// The environment lookup used by the `from_env` constructors.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Base URL and login credentials: the minimum every flow needs.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: ApiUrl,
    pub credentials: Credentials,
}

impl ApiSettings {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve from an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = ApiUrl::new(required(&lookup, BASE_URL)?)?;
        let boid = required(&lookup, LOGIN_BOID)?;
        let password = required(&lookup, LOGIN_PASSWORD)?;

        Ok(Self {
            base_url,
            credentials: Credentials::new(boid, password),
        })
    }
}

/// Credentials for the change-password flow.
///
/// Optional as a group: absent entirely is fine, but a partial set is a
/// configuration error.
#[derive(Clone)]
pub struct ChangePasswordSettings {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordSettings {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve from an arbitrary lookup function.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ConfigError> {
        let vars = [CURRENT_PASSWORD, CHANGE_PASSWORD, CONFIRM_PASSWORD];
        let present = vars
            .into_iter()
            .any(|name| lookup(name).is_some_and(|v| !v.trim().is_empty()));

        if !present {
            return Ok(None);
        }

        Ok(Some(Self {
            current_password: required(&lookup, CURRENT_PASSWORD)?,
            new_password: required(&lookup, CHANGE_PASSWORD)?,
            confirm_password: required(&lookup, CONFIRM_PASSWORD)?,
        }))
    }
}

// Intentionally hide passwords in Debug output
impl fmt::Debug for ChangePasswordSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordSettings")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Identifiers and enrollee details for the DRIP flows.
#[derive(Debug, Clone)]
pub struct DripSettings {
    pub scheme: i64,
    pub user: i64,
    pub name: String,
    pub mobile_number: String,
    pub depository_participant: String,
    pub client_id: String,
    pub boid: String,
}

impl DripSettings {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve from an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            scheme: required_i64(&lookup, VAULT_SCHEME)?,
            user: required_i64(&lookup, VAULT_USER)?,
            name: required(&lookup, VAULT_NAME)?,
            mobile_number: required(&lookup, VAULT_MOBILE)?,
            depository_participant: required(&lookup, VAULT_DP)?,
            client_id: required(&lookup, VAULT_CLIENT_ID)?,
            boid: required(&lookup, VAULT_BOID)?,
        })
    }

    /// Build the enrollment-check request body.
    pub fn check_request(&self) -> crate::domain::DripCheckRequest {
        crate::domain::DripCheckRequest {
            scheme: self.scheme,
            user: self.user,
        }
    }

    /// Build the enrollment-create request body.
    pub fn create_request(&self) -> crate::domain::DripCreateRequest {
        crate::domain::DripCreateRequest {
            scheme: self.scheme,
            user: self.user,
            name: self.name.clone(),
            mobile_number: self.mobile_number.clone(),
            depository_participant: self.depository_participant.clone(),
            client_id: self.client_id.clone(),
            checked: true,
            boid: self.boid.clone(),
        }
    }
}

/// The configured Khalti SIP payment payload.
#[derive(Debug, Clone)]
pub struct KhaltiSettings {
    pub payload: KhaltiInitiateRequest,
}

impl KhaltiSettings {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve from an arbitrary lookup function.
    ///
    /// The payload variable holds a JSON document; it is parsed into the
    /// typed request at load time so a malformed payload fails here, not
    /// inside a test.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = required(&lookup, KHALTI_SIP_PAYLOAD)?;
        let payload = serde_json::from_str(&raw).map_err(|e| ConfigError::InvalidVar {
            name: KHALTI_SIP_PAYLOAD.to_string(),
            reason: format!("not a valid payment payload: {}", e),
        })?;

        Ok(Self { payload })
    }
}
