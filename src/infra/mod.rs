//! Infrastructure: error taxonomy, storage trait and implementation,
//! and the certification/query services.

pub mod certification;
pub mod error;
pub mod query;
pub mod sqlite;
pub mod traits;

pub use certification::{CertificationService, MintReceipt};
pub use error::{PassportError, Result};
pub use query::{PassportDetail, QueryService};
pub use sqlite::SqlitePassportStore;
pub use traits::PassportStore;
