//! Field-level audit logging engine
//!
//! This crate implements the diff-and-record pipeline behind a model audit
//! trail: given the before and after state of a persisted record, compute the
//! minimal field-level change set, attach actor and action metadata, and emit
//! one structured audit record per mutation.
//!
//! The surrounding system stays out of scope by design. Persistence, event
//! dispatch, and request-scoped user tracking are collaborators behind narrow
//! traits:
//!
//! - [`ActorResolver`]: who performed the mutation (null when unknown)
//! - [`SnapshotSource`]: old state lookup for update diffs
//! - [`AuditSink`]: where emitted records go ([`TracingSink`] by default)
//!
//! # Semantics
//!
//! - **Create**: every field changes from absent to its value; always emits.
//! - **Update**: only fields whose values differ are included; a save that
//!   changed nothing emits nothing.
//! - **Delete**: every field changes from its value to absent; always emits.
//! - Actor resolution failures never break the audit path; the record is
//!   emitted with a null actor.
//!
//! # Example
//!
//! ```rust
//! use auditlog_engine::{AuditRecorder, MemorySink, Snapshot, StaticActor};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let recorder = AuditRecorder::new(StaticActor(7), MemorySink::new());
//!
//!     let before = Snapshot::new().field("status", json!("pending"));
//!     let after = Snapshot::new().field("status", json!("done"));
//!
//!     recorder.log_create("Ticket", 42, &before)?;
//!     recorder.log_update("Ticket", 42, &before, &after)?;
//!
//!     assert_eq!(recorder.sink().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod diff;
pub mod entry;
pub mod error;
pub mod recorder;
pub mod sink;
pub mod snapshot;
pub mod source;

pub use actor::*;
pub use diff::*;
pub use entry::*;
pub use error::*;
pub use recorder::*;
pub use sink::*;
pub use snapshot::*;
pub use source::*;
