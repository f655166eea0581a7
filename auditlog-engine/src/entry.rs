// Audit record types and wire contract
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Constant tag carried by every audit record
pub const LOG_TYPE: &str = "AuditLog";

/// Identifier of the acting principal
pub type ActorId = i64;

/// Mutation kind that triggered an audit record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "Create",
            AuditAction::Update => "Update",
            AuditAction::Delete => "Delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted audit record describing a single create/update/delete.
///
/// The wire contract downstream consumers parse is the field set `LogType`,
/// `Class`, `InstanceID`, `Action`, `Actor`, `Changes`. `Changes` is a JSON
/// text blob mapping field name to an `[old, new]` pair. `EntryID` and
/// `Timestamp` are additive and do not affect consumers of the contract
/// fields.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    #[serde(rename = "EntryID")]
    pub entry_id: Uuid,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "LogType")]
    pub log_type: &'static str,
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "InstanceID")]
    pub instance_id: i64,
    #[serde(rename = "Action")]
    pub action: AuditAction,
    #[serde(rename = "Actor")]
    pub actor: Option<ActorId>,
    #[serde(rename = "Changes")]
    pub changes: String,
}

impl AuditRecord {
    pub(crate) fn new(
        class: &str,
        instance_id: i64,
        action: AuditAction,
        actor: Option<ActorId>,
        changes: String,
    ) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            log_type: LOG_TYPE,
            class: class.to_string(),
            instance_id,
            action,
            actor,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_action_as_str() {
        assert_eq!(AuditAction::Create.as_str(), "Create");
        assert_eq!(AuditAction::Update.as_str(), "Update");
        assert_eq!(AuditAction::Delete.as_str(), "Delete");
    }

    #[test]
    fn test_audit_action_display() {
        assert_eq!(AuditAction::Delete.to_string(), "Delete");
    }

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let record = AuditRecord::new(
            "Ticket",
            42,
            AuditAction::Update,
            Some(7),
            r#"{"status":["pending","done"]}"#.to_string(),
        );

        let encoded = serde_json::to_value(&record).unwrap();

        assert_eq!(encoded["LogType"], "AuditLog");
        assert_eq!(encoded["Class"], "Ticket");
        assert_eq!(encoded["InstanceID"], 42);
        assert_eq!(encoded["Action"], "Update");
        assert_eq!(encoded["Actor"], 7);
        assert_eq!(encoded["Changes"], r#"{"status":["pending","done"]}"#);
    }

    #[test]
    fn test_record_serializes_missing_actor_as_null() {
        let record = AuditRecord::new("Ticket", 1, AuditAction::Create, None, "{}".to_string());

        let encoded = serde_json::to_value(&record).unwrap();

        assert!(encoded["Actor"].is_null());
    }

    #[test]
    fn test_records_get_distinct_entry_ids() {
        let a = AuditRecord::new("Ticket", 1, AuditAction::Create, None, "{}".to_string());
        let b = AuditRecord::new("Ticket", 1, AuditAction::Create, None, "{}".to_string());
        assert_ne!(a.entry_id, b.entry_id);
    }
}
