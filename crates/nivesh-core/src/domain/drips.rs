//! Dividend-reinvestment-plan (DRIP) types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /drips/check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DripCheckRequest {
    pub scheme: i64,
    pub user: i64,
}

/// The enrollment record inside a DRIP check response.
///
/// Only the fields the contract pins down are modeled; the server may send
/// more.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DripEnrollment {
    pub user_id: i64,
}

/// Success response from `POST /drips/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DripCheckResponse {
    pub is_enabled: bool,
    pub drip: DripEnrollment,
}

/// Request body for `POST /drips`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DripCreateRequest {
    pub scheme: i64,
    pub user: i64,
    pub name: String,
    pub mobile_number: String,
    pub depository_participant: String,
    pub client_id: String,
    pub checked: bool,
    pub boid: String,
}
