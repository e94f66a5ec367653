//! Storage trait for passports and their audit trails.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{DeviceId, Passport, PassportEvent};
use crate::infra::error::Result;

/// Persistence seam for passports.
///
/// Implementations must make `insert` atomic with respect to the per-device
/// uniqueness invariant: under concurrent inserts for the same device,
/// exactly one caller succeeds and the rest get
/// [`PassportError::AlreadyMinted`](crate::infra::PassportError::AlreadyMinted).
/// A separate existence probe followed by an insert does not satisfy this.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PassportStore: Send + Sync {
    /// Persist a freshly minted passport. Fails with `AlreadyMinted` if a
    /// passport for the device already exists.
    async fn insert(&self, passport: &Passport) -> Result<()>;

    /// Fetch a passport by device id.
    async fn get(&self, device_id: &DeviceId) -> Result<Option<Passport>>;

    /// Whether a passport exists for the device.
    async fn exists(&self, device_id: &DeviceId) -> Result<bool>;

    /// All events for a passport, ascending by timestamp.
    async fn list_events(&self, device_id: &DeviceId) -> Result<Vec<PassportEvent>>;

    /// Append one immutable event to a passport's audit trail; returns the
    /// storage-assigned event id.
    async fn append_event(&self, event: &PassportEvent) -> Result<i64>;
}
