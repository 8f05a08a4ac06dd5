//! Bulk materialization of enum variants into their backing tables.

use rusqlite::params_from_iter;
use tracing::info;

use super::{Database, StoreError};
use crate::conventions::snake_case;
use crate::enums::SeedDb;

impl Database {
    /// Insert one row per given variant into the enum's backing table,
    /// inside a single transaction.
    ///
    /// The caller picks the subset; pass `E::cases()` for a full seed. Not
    /// idempotent: re-seeding an existing variant trips the table's
    /// primary-key constraint, which is propagated unchanged and rolls the
    /// whole call back. Truncate or check before re-seeding.
    pub async fn seed<E: SeedDb>(&self, cases: &[E]) -> Result<usize, StoreError> {
        let mut conn = self.conn.lock().await;

        // Explicit override first, then the registered/guessed binding,
        // then the snake-cased enum name when nothing resolves.
        let table = match E::TABLE_OVERRIDE {
            Some(table) => table.to_string(),
            None => match self.registry.resolve::<E>(&conn) {
                Ok(binding) => binding.table,
                // Nothing resolvable: fall back to the snake-cased enum
                // name and let the store report a truly missing table.
                Err(StoreError::Configuration { .. }) => snake_case(E::ENUM_NAME),
                Err(e) => return Err(e),
            },
        };

        let tx = conn.transaction()?;
        let mut inserted = 0;
        for case in cases.iter().copied() {
            let row = case.db_map();
            let columns: Vec<&str> = row.iter().map(|(c, _)| *c).collect();
            let placeholders: Vec<String> = (1..=row.len()).map(|i| format!("?{i}")).collect();
            let sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                placeholders.join(", ")
            );
            inserted += tx.execute(&sql, params_from_iter(row.into_iter().map(|(_, v)| v)))?;
        }
        tx.commit()?;

        info!("Seeded {} rows into {}", inserted, table);
        Ok(inserted)
    }
}
