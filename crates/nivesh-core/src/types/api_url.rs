//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::ConfigError;

/// A validated API base URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for loopback
/// hosts), and is normalized for endpoint construction. A path prefix such
/// as `/api/v1` is allowed and preserved.
///
/// # Example
///
/// ```
/// use nivesh_core::ApiUrl;
///
/// let base = ApiUrl::new("https://api.example.com/api/v1").unwrap();
/// assert_eq!(base.endpoint_url("login"),
///            "https://api.example.com/api/v1/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::InvalidBaseUrl`] if the URL is not valid or
    /// doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, ConfigError> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| ConfigError::InvalidBaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for a given endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so trim it before joining the endpoint path
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), ConfigError> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            });
        }

        // Must be HTTPS (or HTTP for loopback)
        let scheme = url.scheme();
        let is_loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(ConfigError::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            });
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
