//! Passport Hub Library
//!
//! Certification service that mints tamper-evident "digital passport"
//! records for storage devices that underwent data destruction, enforces
//! at-most-one-passport-per-device, and serves the records back for
//! verification.
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (passports, events, wipe reports, catalog)
//! - [`crypto`] - Canonical-JSON SHA-256 hashing
//! - [`infra`] - Storage trait, SQLite implementation, services
//! - [`api`] - REST API routes
//! - [`server`] - HTTP server bootstrap

pub mod api;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod migrations;
pub mod server;

// Re-export commonly used types
pub use crypto::{compute_chain_hash, Hash256};
pub use domain::{
    AlgorithmCatalog, DeviceId, EventType, Passport, PassportEvent, WipeAlgorithm, WipeReport,
    WipeStatus,
};
pub use infra::{
    CertificationService, MintReceipt, PassportDetail, PassportError, PassportStore, QueryService,
    Result, SqlitePassportStore,
};
