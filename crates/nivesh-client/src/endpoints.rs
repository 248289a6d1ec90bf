//! Endpoint paths and wire-only request types.

use serde::{Deserialize, Serialize};

/// POST {base}/login
pub(crate) const LOGIN: &str = "login";

/// POST {base}/payments/khalti/initiate
pub(crate) const KHALTI_INITIATE: &str = "payments/khalti/initiate";

/// POST {base}/drips/check
pub(crate) const DRIP_CHECK: &str = "drips/check";

/// POST {base}/drips
pub(crate) const DRIP_CREATE: &str = "drips";

/// Request body for the login exchange.
/// Field names are fixed by the external API.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub boid: &'a str,
    pub password: &'a str,
}

/// Error body shape the API uses for rejected requests.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}
