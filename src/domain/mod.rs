//! Core domain types for the passport hub.

pub mod catalog;
pub mod passport;
pub mod report;
pub mod types;

pub use catalog::{AlgorithmCatalog, WipeAlgorithm};
pub use passport::{Passport, PassportEvent};
pub use report::{WipeReport, WipeStatus, MAX_DEVICE_ID_LEN, MAX_WIPE_STANDARD_LEN};
pub use types::{DeviceId, EventType};
