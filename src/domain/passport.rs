//! Passport records and their audit-trail events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{compute_chain_hash, hash256_hex, Hash256};
use crate::domain::types::{DeviceId, EventType};

/// Tamper-evident certificate that a device underwent data destruction.
///
/// At most one passport exists per device. All fields are set once at mint
/// time and never mutated; in particular `chain_hash` is stamped before the
/// record reaches storage and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub device_id: DeviceId,
    pub minted_at: DateTime<Utc>,
    pub wipe_standard: String,
    pub is_certified: bool,
    #[serde(with = "hash256_hex")]
    pub chain_hash: Hash256,
}

impl Passport {
    /// Mint a new certified passport for a device.
    ///
    /// The mint timestamp is truncated to microsecond precision so that the
    /// chain hash can be recomputed bit-for-bit from the stored record.
    pub fn mint(device_id: DeviceId, wipe_standard: impl Into<String>) -> Self {
        let wipe_standard = wipe_standard.into();
        let minted_at = truncate_to_micros(Utc::now());
        let chain_hash = compute_chain_hash(device_id.as_str(), &minted_at, true, &wipe_standard);
        Self {
            device_id,
            minted_at,
            wipe_standard,
            is_certified: true,
            chain_hash,
        }
    }
}

/// One immutable entry in a passport's append-only audit trail.
///
/// Events are owned by exactly one passport and read back in ascending
/// timestamp order. Minting itself writes no event; the trail belongs to
/// downstream collaborators (custody transfers, re-verification, audits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportEvent {
    /// Storage-assigned row id; zero until the event has been appended.
    #[serde(default)]
    pub id: i64,
    pub device_id: DeviceId,
    pub event_type: EventType,
    pub event_data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl PassportEvent {
    pub fn new(device_id: DeviceId, event_type: EventType, event_data: serde_json::Value) -> Self {
        Self {
            id: 0,
            device_id,
            event_type,
            event_data,
            timestamp: truncate_to_micros(Utc::now()),
        }
    }
}

/// Drop sub-microsecond precision so a timestamp survives the TEXT round
/// trip through storage unchanged.
pub fn truncate_to_micros(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(ts.timestamp_micros()).unwrap_or(ts)
}
