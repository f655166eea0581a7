// Record snapshot types
use serde_json::Value;

/// Point-in-time state of one persisted record: field name mapped to field
/// value, in the record type's declared field order.
///
/// Insertion order is preserved so that diffs over the same record type come
/// out in the same order on every run. A record that does not exist (before
/// create, after delete) is represented as `None` at the call site, not as an
/// empty snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    fields: Vec<(String, Value)>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, builder style. Replaces the value in place if the field
    /// is already present, keeping its original position.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a field, keeping declared order stable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Number of fields in the snapshot
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the snapshot has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (name, value) in iter {
            snapshot.set(name, value);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_empty() {
        let snapshot = Snapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert_eq!(snapshot.get("name"), None);
    }

    #[test]
    fn test_snapshot_builder_and_get() {
        let snapshot = Snapshot::new()
            .field("name", json!("Alice"))
            .field("active", json!(true));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("name"), Some(&json!("Alice")));
        assert_eq!(snapshot.get("active"), Some(&json!(true)));
        assert!(!snapshot.contains("missing"));
    }

    #[test]
    fn test_snapshot_preserves_declared_order() {
        let snapshot = Snapshot::new()
            .field("zeta", json!(1))
            .field("alpha", json!(2))
            .field("mid", json!(3));

        let names: Vec<&str> = snapshot.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_snapshot_set_replaces_in_place() {
        let mut snapshot = Snapshot::new()
            .field("a", json!(1))
            .field("b", json!(2));

        snapshot.set("a", json!(10));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a"), Some(&json!(10)));
        let names: Vec<&str> = snapshot.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_snapshot_from_iterator() {
        let snapshot: Snapshot = vec![
            ("id".to_string(), json!(1)),
            ("status".to_string(), json!("pending")),
        ]
        .into_iter()
        .collect();

        assert_eq!(snapshot.get("status"), Some(&json!("pending")));
        assert_eq!(snapshot.len(), 2);
    }
}
