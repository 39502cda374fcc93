//! Append-only audit event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::identifiers::{DealId, EventId};

/// One operation in a before/after diff.
///
/// A tagged variant per operation kind, so applying or displaying a diff
/// is exhaustively checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DiffOp {
    /// A value that exists only in `after` (creation, or a new key).
    Add { path: String, value: Value },
    /// A value that exists only in `before` (deletion, or a dropped key).
    Remove { path: String, value: Value },
    /// A value present on both sides with different content.
    Replace {
        path: String,
        before: Value,
        after: Value,
    },
}

impl DiffOp {
    /// The JSON-pointer-style path this operation applies to.
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. } => path,
            Self::Remove { path, .. } => path,
            Self::Replace { path, .. } => path,
        }
    }
}

/// An immutable audit record: who did what to which artifact, with the
/// resulting diff and a SHA-256 checksum over the write-time payload.
///
/// Events are never updated or deleted once written — they are the
/// single source of truth for what the gates decided and when.
///
/// The checksum is a pure function of {deal_id, actor, artifact, action,
/// diff, metadata, timestamp}. The metadata that participated in the
/// original checksum is NOT persisted on the record; integrity
/// verification recomputes with an empty metadata object, so events
/// written with non-empty metadata will not verify until the write path
/// persists metadata alongside the diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: EventId,
    pub deal_id: Option<DealId>,
    /// Human user id, or `system:G1`..`system:G4` for gate decisions.
    pub actor: String,
    /// The record kind acted on: "deal", "bid", "ledger", "change_order".
    pub artifact: String,
    pub action: String,
    pub diff: Vec<DiffOp>,
    /// Hex-encoded SHA-256 of the write-time payload.
    pub checksum: String,
    pub ts: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diff_op_serializes_with_op_tag() {
        let op = DiffOp::Replace {
            path: "/status".to_string(),
            before: json!("proposed"),
            after: json!("approved"),
        };
        let v = serde_json::to_value(&op).unwrap();
        assert_eq!(v["op"], "replace");
        assert_eq!(v["path"], "/status");
        assert_eq!(v["before"], "proposed");
        assert_eq!(v["after"], "approved");
    }

    #[test]
    fn diff_op_round_trips() {
        let op = DiffOp::Add {
            path: "/".to_string(),
            value: json!({"total": 11500.0}),
        };
        let text = serde_json::to_string(&op).unwrap();
        let back: DiffOp = serde_json::from_str(&text).unwrap();
        assert_eq!(back, op);
    }
}
