//! Change audit entries and the dirty-field comparison behind them.
//!
//! An entry captures one create/update/delete on an audited record. Update
//! entries are restricted to the fields whose value actually changed; a
//! write that changed nothing produces no entry at all.

use rusqlite::types::Value;
use serde_json::json;

/// One immutable audit row. Never mutated; retention is handled externally
/// (see the `activity-log:clean` scheduled job).
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub subject_table: String,
    pub subject_id: i64,
    pub event: String,
    /// JSON object `field -> { "old": ..., "new": ... }`.
    pub changes: serde_json::Value,
    pub actor: Option<String>,
    pub created_at: String,
}

pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => json!(i),
        Value::Real(f) => json!(f),
        Value::Text(s) => json!(s),
        Value::Blob(b) => json!(b),
    }
}

/// Fields whose value differs between the prior and the new row.
pub(crate) fn dirty_changes(
    old: &[(&'static str, Value)],
    new: &[(&'static str, Value)],
) -> serde_json::Map<String, serde_json::Value> {
    let mut changes = serde_json::Map::new();
    for (field, new_value) in new {
        let old_value = old
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.clone())
            .unwrap_or(Value::Null);
        if old_value != *new_value {
            changes.insert(
                (*field).to_string(),
                json!({ "old": value_to_json(&old_value), "new": value_to_json(new_value) }),
            );
        }
    }
    changes
}

/// Change set for a freshly created row: every field is new.
pub(crate) fn created_changes(
    fields: &[(&'static str, Value)],
) -> serde_json::Map<String, serde_json::Value> {
    fields
        .iter()
        .map(|(field, value)| {
            (
                (*field).to_string(),
                json!({ "old": null, "new": value_to_json(value) }),
            )
        })
        .collect()
}

/// Change set for a deleted row: every field goes away.
pub(crate) fn deleted_changes(
    fields: &[(&'static str, Value)],
) -> serde_json::Map<String, serde_json::Value> {
    fields
        .iter()
        .map(|(field, value)| {
            (
                (*field).to_string(),
                json!({ "old": value_to_json(value), "new": null }),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn unchanged_fields_are_never_recorded() {
        let old = [("id", Value::Integer(1)), ("notes", text("a"))];
        let new = [("id", Value::Integer(1)), ("notes", text("b"))];
        let changes = dirty_changes(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes["notes"]["old"], "a");
        assert_eq!(changes["notes"]["new"], "b");
    }

    #[test]
    fn identical_rows_yield_an_empty_change_set() {
        let row = [("id", Value::Integer(1)), ("notes", text("same"))];
        assert!(dirty_changes(&row, &row).is_empty());
    }

    #[test]
    fn created_changes_record_every_field_as_new() {
        let fields = [("id", Value::Integer(7)), ("applicant", text("Rossi"))];
        let changes = created_changes(&fields);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes["applicant"]["old"], serde_json::Value::Null);
        assert_eq!(changes["applicant"]["new"], "Rossi");
    }
}
