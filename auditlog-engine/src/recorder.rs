//! Event recorder: turns one mutation event into at most one audit record.
//!
//! Mirrors the hook points a persistence layer calls around its writes:
//! [`AuditRecorder::log_create`] after an insert, [`AuditRecorder::log_update`]
//! around a save, [`AuditRecorder::log_delete`] around a removal. Each call is
//! stateless and synchronous: resolve the actor, diff the snapshots, write the
//! record to the sink.
//!
//! Creation and deletion are always newsworthy, so those actions emit even
//! when the change set is empty. An update that changed nothing emits nothing.

use tracing::debug;

use crate::actor::ActorResolver;
use crate::diff::diff;
use crate::entry::{AuditAction, AuditRecord};
use crate::error::AuditResult;
use crate::sink::AuditSink;
use crate::snapshot::Snapshot;
use crate::source::SnapshotSource;

/// Records audit entries for model mutations.
///
/// The actor resolver and sink are injected at construction; the recorder
/// holds no other state, so one instance can serve concurrent event contexts.
pub struct AuditRecorder<A, S> {
    actors: A,
    sink: S,
}

impl<A: ActorResolver, S: AuditSink> AuditRecorder<A, S> {
    pub fn new(actors: A, sink: S) -> Self {
        Self { actors, sink }
    }

    /// Access the sink, e.g. to drain a [`crate::MemorySink`]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Record one mutation event.
    ///
    /// `instance_id` must be the record's already-assigned identity; hooks
    /// must not fire for records that were never persisted.
    ///
    /// Returns `Ok(None)` when the event is suppressed (an update with an
    /// empty change set). Otherwise serializes the change set, writes one
    /// record to the sink, and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuditError::Serialization`] if the change set cannot
    /// be encoded; the event is then dropped without a sink write. With the
    /// current `serde_json::Value`-backed snapshots this branch cannot fire
    /// (string keys, JSON-representable values by construction); the variant
    /// pins the policy for field representations that can fail to encode.
    /// Actor resolution failures are swallowed into a null actor, never
    /// returned.
    pub fn record(
        &self,
        action: AuditAction,
        old: Option<&Snapshot>,
        new: Option<&Snapshot>,
        class: &str,
        instance_id: i64,
    ) -> AuditResult<Option<AuditRecord>> {
        let changes = diff(old, new);

        // A no-op save is not an event; creation and deletion are.
        if action == AuditAction::Update && changes.is_empty() {
            debug!(target: "auditlog", class, instance_id, "update changed nothing, skipping");
            return Ok(None);
        }

        let actor = self.actors.current_actor().unwrap_or(None);
        let serialized = serde_json::to_string(&changes)?;

        let record = AuditRecord::new(class, instance_id, action, actor, serialized);
        self.sink.write(&record);
        Ok(Some(record))
    }

    /// Hook for a freshly inserted record. Emits unconditionally.
    pub fn log_create(
        &self,
        class: &str,
        instance_id: i64,
        new: &Snapshot,
    ) -> AuditResult<Option<AuditRecord>> {
        self.record(AuditAction::Create, None, Some(new), class, instance_id)
    }

    /// Hook for a saved record when the caller already holds the old state.
    pub fn log_update(
        &self,
        class: &str,
        instance_id: i64,
        old: &Snapshot,
        new: &Snapshot,
    ) -> AuditResult<Option<AuditRecord>> {
        self.record(AuditAction::Update, Some(old), Some(new), class, instance_id)
    }

    /// Hook for a saved record, fetching the old state from `source`.
    ///
    /// If the record no longer exists when the old state is fetched, or the
    /// lookup itself fails, the event is silently skipped.
    pub fn log_update_from_source<Src: SnapshotSource>(
        &self,
        source: &Src,
        class: &str,
        instance_id: i64,
        new: &Snapshot,
    ) -> AuditResult<Option<AuditRecord>> {
        let old = match source.snapshot(instance_id) {
            Ok(Some(old)) => old,
            Ok(None) => {
                debug!(target: "auditlog", class, instance_id, "record gone before update diff, skipping");
                return Ok(None);
            }
            Err(err) => {
                debug!(target: "auditlog", class, instance_id, error = %err, "old state lookup failed, skipping");
                return Ok(None);
            }
        };
        self.record(AuditAction::Update, Some(&old), Some(new), class, instance_id)
    }

    /// Hook for a removed record. Emits unconditionally.
    pub fn log_delete(
        &self,
        class: &str,
        instance_id: i64,
        old: &Snapshot,
    ) -> AuditResult<Option<AuditRecord>> {
        self.record(AuditAction::Delete, Some(old), None, class, instance_id)
    }
}
