//! Deterministic passport hashing
//!
//! A passport's `chain_hash` binds the record's identity fields at mint time:
//! - RFC 8785 JSON Canonicalization Scheme (JCS) over a fixed four-key object
//! - SHA-256 over the UTF-8 canonical bytes
//! - rendered as 64 lowercase hex characters at the API boundary
//!
//! The hash binds a single record; it deliberately does not link to any prior
//! record. Despite the "chain" name there is no ledger behind it.
//!
//! # RFC 8785 Compliance
//!
//! This module uses `serde_json_canonicalizer` for RFC 8785 compliant JSON
//! canonicalization, ensuring the same record hashes identically across
//! implementations in different languages. Key properties:
//! - Deterministic key ordering (lexicographic UTF-8)
//! - ES6-compatible number serialization
//! - Proper Unicode handling

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// 32-byte SHA-256 hash
pub type Hash256 = [u8; 32];

/// Compute the chain hash stamped onto a passport at mint time.
///
/// The preimage is the RFC 8785 canonical form of:
///
/// ```text
/// {"deviceId": ..., "isCertified": ..., "mintTimestamp": ..., "wipeStandard": ...}
/// ```
///
/// `mint_timestamp` encodes as RFC 3339 UTC with microsecond precision
/// (see [`canonical_timestamp`]), so the hash is reproducible from a stored
/// or returned record.
pub fn compute_chain_hash(
    device_id: &str,
    mint_timestamp: &DateTime<Utc>,
    is_certified: bool,
    wipe_standard: &str,
) -> Hash256 {
    let record = serde_json::json!({
        "deviceId": device_id,
        "mintTimestamp": canonical_timestamp(mint_timestamp),
        "isCertified": is_certified,
        "wipeStandard": wipe_standard,
    });
    let canonical = canonicalize_json(&record);
    sha256(canonical.as_bytes())
}

/// Encode a timestamp the way the chain hash preimage expects it:
/// RFC 3339 UTC with fixed microsecond precision and a `Z` suffix.
pub fn canonical_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Convert JSON value to canonical string representation per RFC 8785 (JCS).
///
/// Uses `serde_json_canonicalizer` for strict RFC 8785 compliance, ensuring:
/// - Keys sorted alphabetically (lexicographic UTF-8)
/// - No extra whitespace
/// - Numbers normalized per ES6/RFC 8785 rules
/// - Strings properly escaped per JSON spec
///
/// # Panics
///
/// Panics if the JSON value contains a float that cannot be represented
/// (NaN or Infinity). Per RFC 8785, these are not valid JSON.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    serde_json_canonicalizer::to_string(value)
        .expect("Failed to canonicalize JSON - contains invalid values (NaN or Infinity)")
}

/// Hash raw bytes with SHA-256
pub fn sha256(data: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Serde adapter for `Hash256` fields rendered as lowercase hex strings.
pub mod hash256_hex {
    use super::Hash256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &Hash256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash256, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 32-byte hex string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_canonical_json_key_ordering() {
        let value = json!({
            "zebra": 1,
            "apple": 2,
            "mango": 3
        });

        let canonical = canonicalize_json(&value);
        assert_eq!(canonical, r#"{"apple":2,"mango":3,"zebra":1}"#);
    }

    #[test]
    fn test_canonical_timestamp_microsecond_precision() {
        assert_eq!(canonical_timestamp(&fixed_ts()), "2026-01-02T03:04:05.123456Z");

        // Whole seconds still render six fractional digits.
        let whole = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(canonical_timestamp(&whole), "2026-01-02T03:04:05.000000Z");
    }

    #[test]
    fn test_chain_hash_preimage_shape() {
        // The preimage has exactly the four keys, lexicographically sorted.
        let expected_preimage = format!(
            r#"{{"deviceId":"AGENT-1-devsda","isCertified":true,"mintTimestamp":"{}","wipeStandard":"NIST SP 800-88 Purge"}}"#,
            canonical_timestamp(&fixed_ts())
        );
        let hash = compute_chain_hash("AGENT-1-devsda", &fixed_ts(), true, "NIST SP 800-88 Purge");
        assert_eq!(hash, sha256(expected_preimage.as_bytes()));
    }

    #[test]
    fn test_chain_hash_deterministic() {
        let ts = fixed_ts();
        let h1 = compute_chain_hash("AGENT-1-devsda", &ts, true, "NIST SP 800-88 Purge");
        let h2 = compute_chain_hash("AGENT-1-devsda", &ts, true, "NIST SP 800-88 Purge");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_chain_hash_avalanche() {
        let ts = fixed_ts();
        let base = compute_chain_hash("AGENT-1-devsda", &ts, true, "NIST SP 800-88 Purge");

        let other_device = compute_chain_hash("AGENT-1-devsdb", &ts, true, "NIST SP 800-88 Purge");
        assert_ne!(base, other_device);

        let other_standard = compute_chain_hash("AGENT-1-devsda", &ts, true, "DoD 5220.22-M");
        assert_ne!(base, other_standard);

        let other_flag = compute_chain_hash("AGENT-1-devsda", &ts, false, "NIST SP 800-88 Purge");
        assert_ne!(base, other_flag);

        let other_ts = ts + chrono::Duration::microseconds(1);
        let other_time =
            compute_chain_hash("AGENT-1-devsda", &other_ts, true, "NIST SP 800-88 Purge");
        assert_ne!(base, other_time);
    }

    #[test]
    fn test_chain_hash_hex_rendering() {
        let rendered = hex::encode(compute_chain_hash(
            "AGENT-1-devsda",
            &fixed_ts(),
            true,
            "NIST SP 800-88 Purge",
        ));
        assert_eq!(rendered.len(), 64);
        assert!(rendered
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash256_hex_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "hash256_hex")]
            hash: Hash256,
        }

        let wrapper = Wrapper { hash: sha256(b"wiped") };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert!(json.contains(&hex::encode(wrapper.hash)));

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hash, wrapper.hash);
    }

    #[test]
    fn test_hash256_hex_rejects_short_input() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "hash256_hex")]
            #[allow(dead_code)]
            hash: Hash256,
        }

        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"hash":"abcd"}"#);
        assert!(result.is_err());
    }
}
