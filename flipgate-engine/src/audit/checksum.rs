//! Event checksums: SHA-256 over the canonical write-time payload.

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use flipgate_core::errors::AuditError;
use flipgate_core::types::{DealId, DiffOp};

/// Compute the hex SHA-256 checksum of an event payload.
///
/// The payload is a pure function of {deal_id, actor, artifact, action,
/// diff, metadata, timestamp}. serde_json object keys serialize sorted,
/// so the byte stream is canonical; the timestamp is rendered as RFC3339
/// with millisecond precision, UTC.
pub fn compute(
    deal_id: Option<DealId>,
    actor: &str,
    artifact: &str,
    action: &str,
    diff: &[DiffOp],
    metadata: &Value,
    ts: DateTime<Utc>,
) -> Result<String, AuditError> {
    let payload = json!({
        "dealId": deal_id,
        "actor": actor,
        "artifact": artifact,
        "action": action,
        "diff": diff,
        "metadata": metadata,
        "timestamp": ts.to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    let bytes = serde_json::to_vec(&payload)?;

    let digest = Sha256::digest(&bytes);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    Ok(hex)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn checksum_is_deterministic() {
        let a = compute(None, "u1", "deal", "CREATE", &[], &json!({}), ts()).unwrap();
        let b = compute(None, "u1", "deal", "CREATE", &[], &json!({}), ts()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn every_field_participates() {
        let base = compute(None, "u1", "deal", "CREATE", &[], &json!({}), ts()).unwrap();
        let actor =
            compute(None, "u2", "deal", "CREATE", &[], &json!({}), ts()).unwrap();
        let action =
            compute(None, "u1", "deal", "UPDATE", &[], &json!({}), ts()).unwrap();
        let metadata =
            compute(None, "u1", "deal", "CREATE", &[], &json!({"k": 1}), ts()).unwrap();
        assert_ne!(base, actor);
        assert_ne!(base, action);
        assert_ne!(base, metadata);
    }

    #[test]
    fn timestamp_precision_is_millis() {
        let fine = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456);
        let coarse = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        // Sub-millisecond detail does not change the payload.
        let a = compute(None, "u1", "deal", "CREATE", &[], &json!({}), fine).unwrap();
        let b = compute(None, "u1", "deal", "CREATE", &[], &json!({}), coarse).unwrap();
        assert_eq!(a, b);
    }
}
