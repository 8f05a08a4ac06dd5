//! SQLite-backed store for the administration core.
//!
//! One `Database` handle per process, holding the connection behind an async
//! mutex and the enum/model binding registry. The per-concern accessor impls
//! live in sibling files (`model`, `seed`, `audit`).

pub mod error;

mod audit;
mod model;
mod seed;

pub use error::StoreError;

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

use crate::conventions::ModelRegistry;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
    registry: Arc<ModelRegistry>,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let conn = Connection::open(path)?;
        let db = Self::from_connection(conn);
        db.initialize().await?;
        info!("Database ready at {}", path.display());
        Ok(db)
    }

    /// In-memory database with the full schema. Used by tests and demos.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let db = Self::from_connection(Connection::open_in_memory()?);
        db.initialize().await?;
        Ok(db)
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            registry: Arc::new(ModelRegistry::new()),
        }
    }

    /// Enum -> model binding registry owned by this handle.
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub(crate) fn raw_connection(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS driving_license_categories (
                id INTEGER PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS driving_license_renewal_statuses (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS renewal_requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                applicant TEXT NOT NULL,
                category_id INTEGER NOT NULL,
                status_id INTEGER NOT NULL,
                notes TEXT NOT NULL DEFAULT ''
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS activity_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                subject_table TEXT NOT NULL,
                subject_id INTEGER NOT NULL,
                event TEXT NOT NULL,
                changes TEXT NOT NULL,
                actor TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        Ok(())
    }
}
