//! Error types for passport hub infrastructure

use thiserror::Error;

use crate::domain::DeviceId;

/// Errors that can occur while certifying or querying passports
#[derive(Error, Debug)]
pub enum PassportError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Wipe report failed the certification rules
    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// A passport already exists for this device
    #[error("passport already minted for device: {0}")]
    AlreadyMinted(DeviceId),

    /// No passport exists for this device
    #[error("passport not found for device: {0}")]
    NotFound(DeviceId),

    /// Internal error (encoding or decoding defect)
    #[error("internal error: {0}")]
    Internal(String),
}

impl PassportError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }
}

/// Result type for passport operations
pub type Result<T> = std::result::Result<T, PassportError>;
