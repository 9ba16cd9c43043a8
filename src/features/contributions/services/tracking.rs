//! Tracking code issuance and certificate hashing.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::shared::constants::{TRACKING_PREFIX, TRACKING_SUFFIX_LEN};

/// Issue a fresh tracking code: "INF-" plus 8 uppercase hex characters.
///
/// Codes are opaque and random; global uniqueness is enforced by the
/// database constraint, with the insert retried on collision.
pub fn generate_tracking_code() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    let code = format!("{}{}", TRACKING_PREFIX, &hex[..TRACKING_SUFFIX_LEN]);
    debug_assert!(crate::shared::validation::TRACKING_REGEX.is_match(&code));
    code
}

/// Certificate fields resolved for an admin overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDecision {
    pub verified: bool,
    pub hash: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub admin_user_id: Option<String>,
}

/// Resolve the certificate fields for an admin overwrite.
///
/// The certificate is write-once: a row that already carries one keeps its
/// hash, date and certifier no matter what the payload says, and `verified`
/// never drops back to false. A payload flipping `verified` to true on an
/// uncertified row stamps a fresh certificate dated `now`. The database
/// update applies the same rule with COALESCE so concurrent writers cannot
/// overwrite an issued certificate either.
#[allow(clippy::too_many_arguments)]
pub fn decide_certificate(
    tracking: &str,
    existing_hash: Option<&str>,
    existing_date: Option<DateTime<Utc>>,
    existing_admin: Option<&str>,
    requested_verified: bool,
    requested_admin: Option<&str>,
    now: DateTime<Utc>,
    co2_saved: Option<f64>,
    water_saved: Option<f64>,
    natural_resources: Option<f64>,
) -> CertificateDecision {
    if let Some(hash) = existing_hash {
        return CertificateDecision {
            verified: true,
            hash: Some(hash.to_string()),
            date: existing_date,
            admin_user_id: existing_admin.map(|a| a.to_string()),
        };
    }

    if requested_verified {
        let hash = certificate_hash(tracking, now, co2_saved, water_saved, natural_resources);
        return CertificateDecision {
            verified: true,
            hash: Some(hash),
            date: Some(now),
            admin_user_id: requested_admin.map(|a| a.to_string()),
        };
    }

    CertificateDecision {
        verified: false,
        hash: None,
        date: None,
        admin_user_id: requested_admin.map(|a| a.to_string()),
    }
}

/// Compute the certificate hash for a contribution at certification time.
///
/// Deterministic over the tracking code, the stamp date, and the impact
/// snapshot, so a certificate can be re-derived and checked later.
pub fn certificate_hash(
    tracking: &str,
    date: DateTime<Utc>,
    co2_saved: Option<f64>,
    water_saved: Option<f64>,
    natural_resources: Option<f64>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(tracking.as_bytes());
    hasher.update(b"|");
    hasher.update(date.to_rfc3339().as_bytes());
    for metric in [co2_saved, water_saved, natural_resources] {
        hasher.update(b"|");
        hasher.update(metric.unwrap_or(0.0).to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::TRACKING_REGEX;
    use chrono::TimeZone;

    #[test]
    fn test_generated_code_matches_format() {
        for _ in 0..100 {
            let code = generate_tracking_code();
            assert!(TRACKING_REGEX.is_match(&code), "bad code: {}", code);
        }
    }

    #[test]
    fn test_generated_codes_are_distinct() {
        let a = generate_tracking_code();
        let b = generate_tracking_code();
        assert_ne!(a, b);
    }

    #[test]
    fn test_certificate_hash_is_deterministic() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let h1 = certificate_hash("INF-0A1B2C3D", date, Some(4.2), Some(1200.0), None);
        let h2 = certificate_hash("INF-0A1B2C3D", date, Some(4.2), Some(1200.0), None);
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64); // sha256 hex
    }

    #[test]
    fn test_first_certification_stamps_hash_and_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let decision = decide_certificate(
            "INF-0A1B2C3D",
            None,
            None,
            None,
            true,
            Some("admin-1"),
            now,
            Some(4.2),
            Some(1200.0),
            None,
        );

        assert!(decision.verified);
        assert_eq!(decision.date, Some(now));
        assert_eq!(decision.admin_user_id.as_deref(), Some("admin-1"));
        assert_eq!(
            decision.hash.as_deref(),
            Some(certificate_hash("INF-0A1B2C3D", now, Some(4.2), Some(1200.0), None).as_str())
        );
    }

    #[test]
    fn test_unverified_overwrite_leaves_certificate_unset() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let decision = decide_certificate(
            "INF-0A1B2C3D",
            None,
            None,
            None,
            false,
            Some("admin-1"),
            now,
            None,
            None,
            None,
        );

        assert!(!decision.verified);
        assert_eq!(decision.hash, None);
        assert_eq!(decision.date, None);
        assert_eq!(decision.admin_user_id.as_deref(), Some("admin-1"));
    }

    #[test]
    fn test_certified_row_keeps_original_certificate() {
        let issued = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let later = issued + chrono::Duration::days(7);
        let original = certificate_hash("INF-0A1B2C3D", issued, Some(4.2), None, None);

        // A later overwrite, even with fresh impact values and a different
        // admin, never touches the issued certificate
        let decision = decide_certificate(
            "INF-0A1B2C3D",
            Some(&original),
            Some(issued),
            Some("admin-1"),
            true,
            Some("admin-2"),
            later,
            Some(9.9),
            Some(3000.0),
            Some(1.0),
        );

        assert!(decision.verified);
        assert_eq!(decision.hash.as_deref(), Some(original.as_str()));
        assert_eq!(decision.date, Some(issued));
        assert_eq!(decision.admin_user_id.as_deref(), Some("admin-1"));
    }

    #[test]
    fn test_verified_never_drops_back_after_certification() {
        let issued = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let original = certificate_hash("INF-0A1B2C3D", issued, None, None, None);

        let decision = decide_certificate(
            "INF-0A1B2C3D",
            Some(&original),
            Some(issued),
            Some("admin-1"),
            false,
            None,
            issued + chrono::Duration::hours(1),
            None,
            None,
            None,
        );

        assert!(decision.verified);
        assert_eq!(decision.hash.as_deref(), Some(original.as_str()));
        assert_eq!(decision.date, Some(issued));
        assert_eq!(decision.admin_user_id.as_deref(), Some("admin-1"));
    }

    #[test]
    fn test_certificate_hash_varies_with_inputs() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let base = certificate_hash("INF-0A1B2C3D", date, Some(4.2), None, None);
        assert_ne!(
            base,
            certificate_hash("INF-DEADBEEF", date, Some(4.2), None, None)
        );
        assert_ne!(
            base,
            certificate_hash("INF-0A1B2C3D", date, Some(4.3), None, None)
        );
        assert_ne!(
            base,
            certificate_hash(
                "INF-0A1B2C3D",
                date + chrono::Duration::seconds(1),
                Some(4.2),
                None,
                None
            )
        );
    }
}
