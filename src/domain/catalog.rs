//! Catalog of wipe algorithms the deployment advertises.
//!
//! The catalog is descriptive configuration only: a mint request may claim
//! any standard name, and the hub records the claim verbatim. Entries here
//! back the read-only `/v1/algorithms` listing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One advertised wipe procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipeAlgorithm {
    pub display_name: String,
    pub passes: String,
    pub description: String,
}

/// Identifier-keyed set of advertised algorithms.
///
/// BTreeMap keeps the listing deterministic across restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmCatalog {
    entries: BTreeMap<String, WipeAlgorithm>,
}

impl AlgorithmCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog: the standards the reference deployments advertise.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "NIST",
            WipeAlgorithm {
                display_name: "NIST SP 800-88 Purge".to_string(),
                passes: "1 Pass (Random)".to_string(),
                description: "The current industry standard for modern SSDs/HDDs. Highly effective and fast.".to_string(),
            },
        );
        catalog.insert(
            "DOD",
            WipeAlgorithm {
                display_name: "DoD 5220.22-M".to_string(),
                passes: "3 Passes (Pattern)".to_string(),
                description: "A legacy military standard, reliable for older magnetic drives (HDDs) but slower.".to_string(),
            },
        );
        catalog.insert(
            "QUICK",
            WipeAlgorithm {
                display_name: "Quick Overwrite (Test)".to_string(),
                passes: "1 Pass (Zero)".to_string(),
                description: "Fastest method, suitable for basic reuse but lowest security guarantee.".to_string(),
            },
        );
        catalog
    }

    pub fn insert(&mut self, id: impl Into<String>, algorithm: WipeAlgorithm) {
        self.entries.insert(id.into(), algorithm);
    }

    pub fn get(&self, id: &str) -> Option<&WipeAlgorithm> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WipeAlgorithm)> {
        self.entries.iter().map(|(id, algo)| (id.as_str(), algo))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
