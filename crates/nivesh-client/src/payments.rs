//! Khalti payment gateway operations.

use tracing::{debug, instrument};

use nivesh_core::Result;
use nivesh_core::domain::{KhaltiInitiateRequest, KhaltiInitiateResponse};

use crate::endpoints::KHALTI_INITIATE;
use crate::session::Session;

impl Session {
    /// Initiate a Khalti payment with the attached SIP plan.
    ///
    /// Returns the gateway's `pidx`, payment URL, and expiry. Whether those
    /// values are acceptable is the caller's concern.
    #[instrument(skip(self, request), fields(base = %self.base(), amount = request.amount))]
    pub async fn initiate_khalti(
        &self,
        request: &KhaltiInitiateRequest,
    ) -> Result<KhaltiInitiateResponse> {
        debug!("Initiating Khalti payment");
        self.post(KHALTI_INITIATE, request).await
    }
}
