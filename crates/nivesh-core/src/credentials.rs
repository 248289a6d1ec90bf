//! Login credentials type.

use std::fmt;

/// Login credentials for a client account.
///
/// This type holds the BOID (beneficiary/owner identifier) and password
/// required to authenticate against the login endpoint.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use nivesh_core::Credentials;
///
/// let creds = Credentials::new("1301630054368345", "Test@123");
/// assert_eq!(creds.boid(), "1301630054368345");
/// ```
pub struct Credentials {
    boid: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `boid` - The client's beneficiary/owner identifier
    /// * `password` - The account password
    pub fn new(boid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            boid: boid.into(),
            password: password.into(),
        }
    }

    /// Returns the BOID.
    pub fn boid(&self) -> &str {
        &self.boid
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("boid", &self.boid)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// Clone is intentionally derived to allow credentials to be reused,
// but the type is not Copy to make credential passing explicit.
impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            boid: self.boid.clone(),
            password: self.password.clone(),
        }
    }
}
