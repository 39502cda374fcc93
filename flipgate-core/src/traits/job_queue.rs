//! Job queue collaborator trait.

use serde_json::Value;

use crate::errors::error_code::{self, ErrorCode};

/// Error from the job-queue collaborator.
#[derive(Debug, thiserror::Error)]
#[error("enqueue to '{queue}' failed: {message}")]
pub struct QueueError {
    pub queue: String,
    pub message: String,
}

impl ErrorCode for QueueError {
    fn error_code(&self) -> &'static str {
        error_code::QUEUE_ERROR
    }
}

/// Fire-and-forget follow-up work, keyed by an event id in the payload.
/// Delivery/retry semantics belong to the host; the engine only logs a
/// failed enqueue, it never fails the triggering write.
pub trait JobQueue: Send + Sync {
    fn enqueue(&self, queue: &str, payload: Value) -> Result<(), QueueError>;
}
