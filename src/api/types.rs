//! API response types.
//!
//! The mint request body is [`WipeReport`](crate::domain::WipeReport)
//! itself; it already carries the camelCase wire shape.

use serde::{Deserialize, Serialize};

use crate::domain::DeviceId;

/// Body of a successful mint (HTTP 201).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintResponse {
    pub message: String,
    pub device_id: DeviceId,
    /// Chain hash as 64 lowercase hex characters.
    pub passport_hash: String,
}
