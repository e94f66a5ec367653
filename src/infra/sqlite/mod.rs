//! SQLite-backed storage.

pub mod passports;

pub use passports::SqlitePassportStore;
