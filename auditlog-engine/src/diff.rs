//! Field-level diff between two optional record snapshots.
//!
//! Create and delete are the degenerate cases of the same two-sided diff:
//! a missing side means the record does not exist there, so every field on
//! the present side counts as changed against the `absent` sentinel.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::snapshot::Snapshot;

/// One changed field: old and new value, where `None` is the "absent"
/// sentinel (field or record did not exist on that side). Distinct from
/// `Value::Null`, which is a real stored null.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub old: Option<Value>,
    pub new: Option<Value>,
}

/// Ordered set of field changes between two snapshots.
///
/// Serializes as a JSON object mapping field name to a two-element
/// `[old, new]` array, with the absent sentinel encoded as JSON `null`.
/// Entries keep snapshot declared-field order, so the serialized form is
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    changes: Vec<FieldChange>,
}

impl ChangeSet {
    /// Check if no fields changed
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changed fields
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Look up the change recorded for one field
    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.changes.iter().find(|c| c.field == field)
    }

    /// Iterate changes in declared-field order
    pub fn iter(&self) -> impl Iterator<Item = &FieldChange> {
        self.changes.iter()
    }

    fn push(&mut self, field: &str, old: Option<Value>, new: Option<Value>) {
        self.changes.push(FieldChange {
            field: field.to_string(),
            old,
            new,
        });
    }
}

impl Serialize for ChangeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.changes.len()))?;
        for change in &self.changes {
            map.serialize_entry(&change.field, &(&change.old, &change.new))?;
        }
        map.end()
    }
}

/// Compute the change set between two optional snapshots of the same
/// logical record.
///
/// A field appears in the result iff its value differs between the two
/// sides, comparing by value equality. Fields are emitted in the old
/// snapshot's declared order, followed by fields that exist only in the
/// new snapshot, in its declared order. Pure function; a missing snapshot
/// is a valid input meaning the record does not exist on that side.
pub fn diff(old: Option<&Snapshot>, new: Option<&Snapshot>) -> ChangeSet {
    let mut changes = ChangeSet::default();

    match (old, new) {
        (None, None) => {}
        (None, Some(new)) => {
            for (field, value) in new.iter() {
                changes.push(field, None, Some(value.clone()));
            }
        }
        (Some(old), None) => {
            for (field, value) in old.iter() {
                changes.push(field, Some(value.clone()), None);
            }
        }
        (Some(old), Some(new)) => {
            for (field, old_value) in old.iter() {
                match new.get(field) {
                    Some(new_value) if new_value == old_value => {}
                    Some(new_value) => {
                        changes.push(field, Some(old_value.clone()), Some(new_value.clone()));
                    }
                    None => changes.push(field, Some(old_value.clone()), None),
                }
            }
            for (field, new_value) in new.iter() {
                if !old.contains(field) {
                    changes.push(field, None, Some(new_value.clone()));
                }
            }
        }
    }

    changes
}
