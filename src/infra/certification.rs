//! Certification: turning a wipe report into a minted passport.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::crypto::{hash256_hex, Hash256};
use crate::domain::{DeviceId, Passport, WipeReport};
use crate::infra::error::{PassportError, Result};
use crate::infra::traits::PassportStore;

/// Proof of a successful mint, returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintReceipt {
    pub device_id: DeviceId,
    #[serde(with = "hash256_hex")]
    pub chain_hash: Hash256,
}

/// Decides whether a wipe report earns a passport and mints it.
pub struct CertificationService {
    store: Arc<dyn PassportStore>,
}

impl CertificationService {
    pub fn new(store: Arc<dyn PassportStore>) -> Self {
        Self { store }
    }

    /// Mint a passport for a successfully wiped device.
    ///
    /// The report must pass the certification rules (non-empty bounded
    /// fields, `SUCCESS` status); nothing is persisted otherwise. The chain
    /// hash is stamped before the record reaches the store, and uniqueness
    /// is left entirely to the store's atomic insert.
    pub async fn mint(&self, report: WipeReport) -> Result<MintReceipt> {
        if let Err(errors) = report.validate() {
            warn!(device_id = %report.device_id, ?errors, "rejecting wipe report");
            return Err(PassportError::validation(errors));
        }

        let passport = Passport::mint(DeviceId::new(&report.device_id), &report.wipe_standard);
        self.store.insert(&passport).await?;

        info!(
            device_id = %passport.device_id,
            chain_hash = %hex::encode(passport.chain_hash),
            wipe_standard = %passport.wipe_standard,
            "minted digital passport"
        );

        Ok(MintReceipt {
            device_id: passport.device_id,
            chain_hash: passport.chain_hash,
        })
    }
}
