//! Cryptographic utilities: canonical-JSON hashing for passport records.

pub mod hash;

pub use hash::{canonical_timestamp, canonicalize_json, compute_chain_hash, hash256_hex, sha256, Hash256};
