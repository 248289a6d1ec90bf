//! DRIP enrollment operations.

use tracing::{debug, instrument};

use nivesh_core::Result;
use nivesh_core::domain::{DripCheckRequest, DripCheckResponse, DripCreateRequest};

use crate::endpoints::{DRIP_CHECK, DRIP_CREATE};
use crate::session::Session;

impl Session {
    /// Check DRIP enrollment for a user/scheme pair.
    #[instrument(skip(self), fields(base = %self.base(), scheme = request.scheme, user = request.user))]
    pub async fn check_drip(&self, request: &DripCheckRequest) -> Result<DripCheckResponse> {
        debug!("Checking DRIP enrollment");
        self.post(DRIP_CHECK, request).await
    }

    /// Create a DRIP enrollment.
    ///
    /// Returns the response status so callers can assert the documented 201;
    /// any non-2xx status is surfaced as a request error.
    #[instrument(skip(self, request), fields(base = %self.base(), scheme = request.scheme, user = request.user))]
    pub async fn create_drip(&self, request: &DripCreateRequest) -> Result<u16> {
        debug!("Creating DRIP enrollment");
        self.post_status(DRIP_CREATE, request).await
    }
}
