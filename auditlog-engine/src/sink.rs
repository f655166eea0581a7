//! Sinks that receive emitted audit records.
//!
//! The recorder hands each qualifying record to the sink exactly once, as a
//! single structured write. Sinks are fire-and-forget from the recorder's
//! point of view: no retries, no buffering, no persistence here.

use std::sync::Mutex;

use crate::entry::AuditRecord;

/// Consumer of emitted audit records
pub trait AuditSink: Send + Sync {
    fn write(&self, record: &AuditRecord);
}

/// Sink that emits each audit record as one structured `tracing` event on
/// the `auditlog` target, with the wire contract fields attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn write(&self, record: &AuditRecord) {
        tracing::info!(
            target: "auditlog",
            LogType = record.log_type,
            Class = %record.class,
            InstanceID = record.instance_id,
            Action = record.action.as_str(),
            Actor = record.actor,
            Changes = %record.changes,
            "audit record emitted"
        );
    }
}

/// In-memory sink collecting records behind a mutex. Used in tests and by
/// embedders that forward records to their own pipeline.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records written so far
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemorySink {
    fn write(&self, record: &AuditRecord) {
        if let Ok(mut guard) = self.records.lock() {
            guard.push(record.clone());
        }
    }
}
