//! Wipe-result reports delivered by the external wipe executor.

use serde::{Deserialize, Serialize};

/// Maximum length of a device identifier.
pub const MAX_DEVICE_ID_LEN: usize = 50;

/// Maximum length of a claimed wipe-standard name.
pub const MAX_WIPE_STANDARD_LEN: usize = 100;

/// Outcome reported by the wipe executor for a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WipeStatus {
    Success,
    Failure,
}

impl std::fmt::Display for WipeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WipeStatus::Success => write!(f, "SUCCESS"),
            WipeStatus::Failure => write!(f, "FAILURE"),
        }
    }
}

/// One wipe attempt's result, as submitted for certification.
///
/// The hub imposes no protocol on how the report was produced; it only
/// decides whether the report earns a passport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipeReport {
    pub device_id: String,
    pub wipe_status: WipeStatus,
    pub wipe_standard: String,
    /// Free-form log excerpt from the executor. Accepted for audit purposes,
    /// never persisted on the passport itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_log: Option<String>,
}

impl WipeReport {
    /// Check the report against the certification rules.
    ///
    /// Returns every violated rule, not just the first, so a caller can
    /// surface the full list in one response.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        // Limits count characters, not UTF-8 bytes.
        if self.device_id.is_empty() {
            errors.push("deviceId must not be empty".to_string());
        } else if self.device_id.chars().count() > MAX_DEVICE_ID_LEN {
            errors.push(format!(
                "deviceId must be at most {MAX_DEVICE_ID_LEN} characters"
            ));
        }

        if self.wipe_standard.is_empty() {
            errors.push("wipeStandard must not be empty".to_string());
        } else if self.wipe_standard.chars().count() > MAX_WIPE_STANDARD_LEN {
            errors.push(format!(
                "wipeStandard must be at most {MAX_WIPE_STANDARD_LEN} characters"
            ));
        }

        if self.wipe_status != WipeStatus::Success {
            errors.push("wipe process reported failure".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_report() -> WipeReport {
        WipeReport {
            device_id: "AGENT-1-devsda".to_string(),
            wipe_status: WipeStatus::Success,
            wipe_standard: "NIST SP 800-88 Purge".to_string(),
            verification_log: None,
        }
    }

    #[test]
    fn test_success_report_is_valid() {
        assert!(success_report().validate().is_ok());
    }

    #[test]
    fn test_failure_status_rejected() {
        let mut report = success_report();
        report.wipe_status = WipeStatus::Failure;

        let errors = report.validate().unwrap_err();
        assert_eq!(errors, vec!["wipe process reported failure".to_string()]);
    }

    #[test]
    fn test_field_limits() {
        let mut report = success_report();
        report.device_id = "x".repeat(MAX_DEVICE_ID_LEN + 1);
        report.wipe_standard = "y".repeat(MAX_WIPE_STANDARD_LEN + 1);

        let errors = report.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("deviceId"));
        assert!(errors[1].contains("wipeStandard"));
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // 50 two-byte characters: 100 bytes, still within the 50-char bound.
        let mut report = success_report();
        report.device_id = "Ä".repeat(MAX_DEVICE_ID_LEN);
        report.wipe_standard = "Ü".repeat(MAX_WIPE_STANDARD_LEN);
        assert!(report.validate().is_ok());

        // One character over the bound is rejected.
        report.device_id = "Ä".repeat(MAX_DEVICE_ID_LEN + 1);
        let errors = report.validate().unwrap_err();
        assert_eq!(errors, vec![format!("deviceId must be at most {MAX_DEVICE_ID_LEN} characters")]);
    }

    #[test]
    fn test_empty_fields_collect_all_errors() {
        let report = WipeReport {
            device_id: String::new(),
            wipe_status: WipeStatus::Failure,
            wipe_standard: String::new(),
            verification_log: None,
        };

        let errors = report.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_wipe_status_wire_format() {
        assert_eq!(serde_json::to_string(&WipeStatus::Success).unwrap(), r#""SUCCESS""#);
        assert_eq!(serde_json::to_string(&WipeStatus::Failure).unwrap(), r#""FAILURE""#);

        let status: WipeStatus = serde_json::from_str(r#""SUCCESS""#).unwrap();
        assert_eq!(status, WipeStatus::Success);
    }

    #[test]
    fn test_report_deserializes_camel_case() {
        let report: WipeReport = serde_json::from_str(
            r#"{"deviceId":"AGENT-1-devsda","wipeStatus":"SUCCESS","wipeStandard":"NIST SP 800-88 Purge","verificationLog":"pass 1/1 ok"}"#,
        )
        .unwrap();
        assert_eq!(report.device_id, "AGENT-1-devsda");
        assert_eq!(report.verification_log.as_deref(), Some("pass 1/1 ok"));
    }
}
