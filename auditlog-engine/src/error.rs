use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Change set serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Actor lookup failed: {0}")]
    ActorLookup(String),

    #[error("Snapshot lookup failed: {0}")]
    SnapshotLookup(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type AuditResult<T> = std::result::Result<T, AuditError>;
