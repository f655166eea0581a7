// Old-state lookup for update events
use crate::error::AuditResult;
use crate::snapshot::Snapshot;

/// Fetches the currently persisted state of a record, used to obtain the
/// `old` side of an update diff. `Ok(None)` means the record does not exist.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource: Send + Sync {
    fn snapshot(&self, instance_id: i64) -> AuditResult<Option<Snapshot>>;
}
