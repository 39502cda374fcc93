//! The append-only, checksummed audit event log.
//!
//! Every gate decision and guarded mutation lands here as an immutable
//! event carrying a before/after diff and a SHA-256 checksum of the
//! write-time payload. Events are never updated or deleted; concurrent
//! writers are safe because ordering comes from the stored timestamp.

pub mod checksum;
pub mod diff;

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use flipgate_core::errors::AuditError;
use flipgate_core::traits::{JobQueue, Store};
use flipgate_core::types::{AuditEvent, DealId, EventId};

/// Input for one event write.
#[derive(Debug, Clone)]
pub struct WriteEvent {
    pub deal_id: Option<DealId>,
    pub actor: String,
    pub artifact: String,
    pub action: String,
    /// Callers performing an update or delete must supply `before`
    /// themselves; there is no automatic capture.
    pub before: Option<Value>,
    pub after: Option<Value>,
    /// Participates in the checksum but is NOT persisted on the record.
    pub metadata: Value,
}

impl WriteEvent {
    pub fn new(actor: &str, artifact: &str, action: &str) -> Self {
        Self {
            deal_id: None,
            actor: actor.to_string(),
            artifact: artifact.to_string(),
            action: action.to_string(),
            before: None,
            after: None,
            metadata: json!({}),
        }
    }

    pub fn deal(mut self, deal_id: DealId) -> Self {
        self.deal_id = Some(deal_id);
        self
    }

    pub fn before(mut self, before: Value) -> Self {
        self.before = Some(before);
        self
    }

    pub fn after(mut self, after: Value) -> Self {
        self.after = Some(after);
        self
    }

    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Follow-up job options for [`EventLog::with_event`].
#[derive(Debug, Clone)]
pub struct EnqueueOptions {
    pub queue: String,
}

/// The audit event log.
pub struct EventLog {
    store: Arc<dyn Store>,
    queue: Option<Arc<dyn JobQueue>>,
}

impl EventLog {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store, queue: None }
    }

    /// Attach a job-queue collaborator for follow-up work.
    pub fn with_queue(mut self, queue: Arc<dyn JobQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Diff, checksum, and append one event. Returns the new event id.
    pub fn write_event(&self, write: WriteEvent) -> Result<EventId, AuditError> {
        let diff = diff::compute(write.before.as_ref(), write.after.as_ref());
        let ts = chrono::Utc::now();
        let checksum = checksum::compute(
            write.deal_id,
            &write.actor,
            &write.artifact,
            &write.action,
            &diff,
            &write.metadata,
            ts,
        )?;

        let event = AuditEvent {
            id: EventId::new(),
            deal_id: write.deal_id,
            actor: write.actor,
            artifact: write.artifact,
            action: write.action,
            diff,
            checksum,
            ts,
        };
        self.store.append_event(&event)?;

        tracing::debug!(
            event = %event.id,
            actor = %event.actor,
            artifact = %event.artifact,
            action = %event.action,
            "audit event appended"
        );
        Ok(event.id)
    }

    /// Run `mutate`, record its serialized result as the event's `after`
    /// value, and optionally enqueue a follow-up job carrying the new
    /// event id.
    ///
    /// No `before` is captured automatically — mutations that replace or
    /// delete state must go through [`EventLog::write_event`] with an
    /// explicit `before`.
    pub fn with_event<T, F>(
        &self,
        deal_id: Option<DealId>,
        actor: &str,
        artifact: &str,
        action: &str,
        mutate: F,
        enqueue: Option<EnqueueOptions>,
    ) -> Result<(T, EventId), AuditError>
    where
        T: Serialize,
        F: FnOnce() -> Result<T, AuditError>,
    {
        let result = mutate()?;
        let after = serde_json::to_value(&result)?;

        let mut write = WriteEvent::new(actor, artifact, action).after(after);
        write.deal_id = deal_id;
        let event_id = self.write_event(write)?;

        if let Some(options) = enqueue {
            self.enqueue_follow_up(&options.queue, event_id);
        }
        Ok((result, event_id))
    }

    /// Refetch an event and recompute its checksum from the stored
    /// fields. Returns `Ok(false)` on mismatch; no repair is attempted.
    ///
    /// Recomputation uses the current contract: metadata is fixed to an
    /// empty object, because the write-time metadata is not persisted.
    /// Any event originally written with non-empty metadata therefore
    /// fails verification until the write path persists metadata
    /// alongside the diff.
    pub fn verify_event_integrity(&self, id: EventId) -> Result<bool, AuditError> {
        let event = self
            .store
            .get_event(id)?
            .ok_or(AuditError::EventNotFound(id))?;

        let recomputed = checksum::compute(
            event.deal_id,
            &event.actor,
            &event.artifact,
            &event.action,
            &event.diff,
            &json!({}),
            event.ts,
        )?;

        let intact = recomputed == event.checksum;
        if !intact {
            tracing::warn!(event = %event.id, "event checksum mismatch");
        }
        Ok(intact)
    }

    /// Fire-and-forget: a failed enqueue is logged, never propagated.
    fn enqueue_follow_up(&self, queue: &str, event_id: EventId) {
        let Some(jobs) = &self.queue else {
            tracing::warn!(queue, "no job queue configured, dropping follow-up");
            return;
        };
        let payload = json!({ "event_id": event_id });
        if let Err(e) = jobs.enqueue(queue, payload) {
            tracing::warn!(queue, error = %e, "follow-up enqueue failed");
        }
    }
}
