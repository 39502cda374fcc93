//! Event log errors.

use crate::types::EventId;

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors that can occur writing or verifying audit events.
///
/// A checksum mismatch is NOT an error — verification returns
/// `Ok(false)` and the caller decides escalation.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    #[error("event payload serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for AuditError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl ErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::AUDIT_ERROR,
        }
    }
}
