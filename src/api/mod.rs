//! REST API surface.

pub mod error;
pub mod rest;
pub mod types;

pub use error::ApiError;
pub use rest::router;
pub use types::MintResponse;
