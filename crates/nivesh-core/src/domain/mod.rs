//! Domain request/response types for the API wire contract.
//!
//! Field names and casing are fixed by the external API and must not be
//! altered: domain endpoints use camelCase, while the Khalti gateway
//! responds in snake_case.

mod drips;
mod payments;

pub use drips::{DripCheckRequest, DripCheckResponse, DripCreateRequest, DripEnrollment};
pub use payments::{
    KhaltiInitiateRequest, KhaltiInitiateResponse, SipInterval, SipMode, SipPlan, TransactionType,
};
