//! Read-side access to minted passports.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{DeviceId, Passport, PassportEvent};
use crate::infra::error::{PassportError, Result};
use crate::infra::traits::PassportStore;

/// A passport together with its audit trail, events ascending by timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct PassportDetail {
    pub passport: Passport,
    pub events: Vec<PassportEvent>,
}

/// Read-only lookups; no side effects.
pub struct QueryService {
    store: Arc<dyn PassportStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn PassportStore>) -> Self {
        Self { store }
    }

    /// Fetch a passport and its full event trail.
    pub async fn passport_detail(&self, device_id: &DeviceId) -> Result<PassportDetail> {
        let passport = self
            .store
            .get(device_id)
            .await?
            .ok_or_else(|| PassportError::NotFound(device_id.clone()))?;
        let events = self.store.list_events(device_id).await?;
        Ok(PassportDetail { passport, events })
    }

    /// Whether a passport exists for the device. Also doubles as a cheap
    /// liveness probe against the store.
    pub async fn exists(&self, device_id: &DeviceId) -> Result<bool> {
        self.store.exists(device_id).await
    }
}
