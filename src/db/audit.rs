//! Audited create/update/delete and activity-log queries.
//!
//! The audit write is a pure observation hook: it runs after the record
//! write has succeeded and a failed audit insert is logged, never bubbled
//! up to veto the write.

use rusqlite::Connection;
use rusqlite::params;
use rusqlite::types::Value;
use tracing::error;

use super::{Database, StoreError};
use crate::audit::{ActivityEntry, created_changes, deleted_changes, dirty_changes};
use crate::models::{Auditable, ModelRecord};

impl Database {
    /// Insert the record and log a `created` entry covering every field.
    ///
    /// A record with key 0 gets its key assigned by the store; the returned
    /// id is the persisted one either way.
    pub async fn create_audited<R: Auditable>(
        &self,
        record: &R,
        actor: Option<&str>,
    ) -> Result<i64, StoreError> {
        let conn = self.conn.lock().await;

        let mut fields = record.field_values();
        if record.primary_key() == 0 {
            fields.retain(|(column, _)| *column != "id");
        }
        let columns: Vec<&str> = fields.iter().map(|(c, _)| *c).collect();
        let placeholders: Vec<String> = (1..=fields.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            columns.join(", "),
            placeholders.join(", ")
        );
        conn.execute(&sql, rusqlite::params_from_iter(fields.iter().map(|(_, v)| v.clone())))?;

        let id = if record.primary_key() == 0 {
            conn.last_insert_rowid()
        } else {
            record.primary_key()
        };

        let mut logged = record.field_values();
        if let Some(slot) = logged.iter_mut().find(|(c, _)| *c == "id") {
            slot.1 = Value::Integer(id);
        }
        write_entry(&conn, R::TABLE, id, "created", &created_changes(&logged), actor);
        Ok(id)
    }

    /// Update the record and log an `updated` entry restricted to the
    /// fields that actually changed. A write that changes nothing is
    /// performed but produces no entry.
    pub async fn update_audited<R: Auditable>(
        &self,
        record: &R,
        actor: Option<&str>,
    ) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;

        let old = read_fields::<R>(&conn, record.primary_key())?.ok_or(StoreError::NotFound {
            record: R::RECORD_NAME,
            id: record.primary_key(),
        })?;
        let new = record.field_values();

        let assignments: Vec<String> = new
            .iter()
            .filter(|(column, _)| *column != "id")
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            R::TABLE,
            assignments.join(", "),
            assignments.len() + 1
        );
        let mut values: Vec<Value> = new
            .iter()
            .filter(|(column, _)| *column != "id")
            .map(|(_, v)| v.clone())
            .collect();
        values.push(Value::Integer(record.primary_key()));
        conn.execute(&sql, rusqlite::params_from_iter(values))?;

        let changes = dirty_changes(&old, &new);
        if !changes.is_empty() {
            write_entry(&conn, R::TABLE, record.primary_key(), "updated", &changes, actor);
        }
        Ok(())
    }

    /// Delete the record and log a `deleted` entry with the removed values.
    /// Deleting an already-absent row is a no-op and logs nothing.
    pub async fn delete_audited<R: Auditable>(
        &self,
        record: &R,
        actor: Option<&str>,
    ) -> Result<bool, StoreError> {
        let conn = self.conn.lock().await;

        let Some(old) = read_fields::<R>(&conn, record.primary_key())? else {
            return Ok(false);
        };
        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", R::TABLE),
            [record.primary_key()],
        )?;
        write_entry(
            &conn,
            R::TABLE,
            record.primary_key(),
            "deleted",
            &deleted_changes(&old),
            actor,
        );
        Ok(true)
    }

    /// All activity recorded for one subject row, oldest first.
    pub async fn activity_for(
        &self,
        subject_table: &str,
        subject_id: i64,
    ) -> Result<Vec<ActivityEntry>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, subject_table, subject_id, event, changes, actor, created_at
             FROM activity_log
             WHERE subject_table = ?1 AND subject_id = ?2
             ORDER BY id",
        )?;

        let rows = stmt.query_map(params![subject_table, subject_id], |row| {
            let raw: String = row.get(4)?;
            Ok(ActivityEntry {
                id: row.get(0)?,
                subject_table: row.get(1)?,
                subject_id: row.get(2)?,
                event: row.get(3)?,
                changes: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
                actor: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Drop activity entries older than the given number of days. Retention
    /// hook for the `activity-log:clean` scheduled job.
    pub async fn prune_activity_log(&self, days: u32) -> Result<usize, StoreError> {
        let conn = self.conn.lock().await;
        let removed = conn.execute(
            "DELETE FROM activity_log WHERE created_at < datetime('now', ?1)",
            [format!("-{days} days")],
        )?;
        Ok(removed)
    }
}

fn read_fields<R: ModelRecord>(
    conn: &Connection,
    id: i64,
) -> Result<Option<Vec<(&'static str, Value)>>, StoreError> {
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ?1",
        R::columns().join(", "),
        R::TABLE
    );
    let row = conn.query_row(&sql, [id], |row| {
        let mut fields = Vec::with_capacity(R::columns().len());
        for (i, column) in R::columns().iter().enumerate() {
            fields.push((*column, row.get::<_, Value>(i)?));
        }
        Ok(fields)
    });
    match row {
        Ok(fields) => Ok(Some(fields)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_entry(
    conn: &Connection,
    subject_table: &str,
    subject_id: i64,
    event: &str,
    changes: &serde_json::Map<String, serde_json::Value>,
    actor: Option<&str>,
) {
    let payload = serde_json::Value::Object(changes.clone()).to_string();
    let outcome = conn.execute(
        "INSERT INTO activity_log (subject_table, subject_id, event, changes, actor)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![subject_table, subject_id, event, payload, actor],
    );
    if let Err(e) = outcome {
        error!(
            "Failed to record {} activity for {}#{}: {}",
            event, subject_table, subject_id, e
        );
    }
}
