//! Authenticated session management.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument};

use nivesh_core::error::AuthError;
use nivesh_core::{AccessToken, ApiUrl, Credentials, RefreshToken, Result};

use crate::endpoints::{LOGIN, LoginRequest};
use crate::rest::RestClient;

/// Which login-response fields carry the tokens.
///
/// The API is inconsistent across surfaces: the primary login response uses
/// `token`/`refreshToken`, while another surface returns `accessToken`. The
/// mapping is resolved once per login call instead of being re-decided at
/// every call site.
#[derive(Debug, Clone)]
pub struct TokenFields {
    /// Field holding the access token.
    pub access: &'static str,
    /// Field holding the refresh token.
    pub refresh: &'static str,
    /// Whether a missing refresh field fails the login as malformed.
    pub refresh_required: bool,
}

impl TokenFields {
    /// `token` / `refreshToken`, both required. The primary login surface.
    pub const TOKEN: TokenFields = TokenFields {
        access: "token",
        refresh: "refreshToken",
        refresh_required: true,
    };

    /// `accessToken` surface; the refresh token is captured when present.
    pub const ACCESS_TOKEN: TokenFields = TokenFields {
        access: "accessToken",
        refresh: "refreshToken",
        refresh_required: false,
    };
}

impl Default for TokenFields {
    fn default() -> Self {
        Self::TOKEN
    }
}

/// A session representing an authenticated connection to the API.
///
/// Sessions are obtained via [`Session::login()`] and are immutable once
/// created: there is no in-place refresh, and the token travels only inside
/// the returned value, never through process-global state. Callers thread
/// the session explicitly to whatever issues requests.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and are safe to
/// share across threads.
///
/// # Example
///
/// ```no_run
/// use nivesh_client::Session;
/// use nivesh_core::{ApiUrl, Credentials};
///
/// # async fn example() -> nivesh_core::Result<()> {
/// let base = ApiUrl::new("https://api.example.com/api/v1")?;
/// let credentials = Credentials::new("1301630054368345", "Test@123");
/// let session = Session::login(&base, &credentials).await?;
///
/// println!("token length: {}", session.access_token().as_str().len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    base: ApiUrl,
    client: RestClient,
    access_token: AccessToken,
    refresh_token: Option<RefreshToken>,
}

impl Session {
    /// Authenticate and create a new session.
    ///
    /// Uses the default [`TokenFields::TOKEN`] mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the credentials, answers with
    /// a malformed body, or is unreachable. Login failures are never
    /// retried.
    pub async fn login(base: &ApiUrl, credentials: &Credentials) -> Result<Self> {
        Self::login_with_fields(base, credentials, &TokenFields::TOKEN).await
    }

    /// Authenticate with an explicit token field mapping.
    #[instrument(skip(credentials, fields), fields(base = %base, boid = %credentials.boid()))]
    pub async fn login_with_fields(
        base: &ApiUrl,
        credentials: &Credentials,
        fields: &TokenFields,
    ) -> Result<Self> {
        info!("Creating new session");

        let client = RestClient::new(base.clone());
        let request = LoginRequest {
            boid: credentials.boid(),
            password: credentials.password(),
        };

        let (status, body) = client.post_raw(LOGIN, &request).await?;

        if status != 200 {
            return Err(AuthError::LoginRejected { status, body }.into());
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|_| AuthError::MalformedResponse { body: body.clone() })?;

        let access_token = match value.get(fields.access).and_then(|v| v.as_str()) {
            Some(token) if !token.is_empty() => AccessToken::new(token),
            _ => return Err(AuthError::MalformedResponse { body }.into()),
        };

        let refresh_token = match value.get(fields.refresh).and_then(|v| v.as_str()) {
            Some(token) => Some(RefreshToken::new(token)),
            None if fields.refresh_required => {
                return Err(AuthError::MalformedResponse { body }.into());
            }
            None => None,
        };

        debug!("Session created successfully");

        Ok(Self {
            inner: Arc::new(SessionInner {
                base: base.clone(),
                client,
                access_token,
                refresh_token,
            }),
        })
    }

    /// Returns the base URL for this session.
    pub fn base(&self) -> &ApiUrl {
        &self.inner.base
    }

    /// Returns the access token for this session.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It grants access to the account.
    pub fn access_token(&self) -> AccessToken {
        self.inner.access_token.clone()
    }

    /// Returns the refresh token, if the login surface provided one.
    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.inner.refresh_token.clone()
    }

    /// Issue an authenticated POST against an arbitrary endpoint path.
    #[instrument(skip(self, body), fields(base = %self.inner.base))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        debug!(path, "authenticated POST");
        self.inner
            .client
            .post_authed(path, body, self.inner.access_token.as_str())
            .await
    }

    /// Authenticated POST where only the response status matters.
    pub(crate) async fn post_status<B: Serialize>(&self, path: &str, body: &B) -> Result<u16> {
        self.inner
            .client
            .post_authed_status(path, body, self.inner.access_token.as_str())
            .await
    }

    /// Issue an authenticated GET against an arbitrary endpoint path.
    #[instrument(skip(self, query), fields(base = %self.inner.base))]
    pub async fn get<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        debug!(path, "authenticated GET");
        self.inner
            .client
            .get_authed(path, query, self.inner.access_token.as_str())
            .await
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base", &self.inner.base)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
