use thiserror::Error;

/// Failures surfaced by the store layer.
///
/// Absence of an enum variant for a record is NOT represented here: that is
/// an expected outcome and `HasEnum::enum_case` returns `None` for it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Strict lookup found no row for the requested key.
    #[error("no {record} row with id {id}")]
    NotFound { record: &'static str, id: i64 },

    /// The enum's backing model could not be resolved: the table guessed by
    /// convention does not exist and no explicit binding was registered.
    #[error(
        "model for enum {enum_name} could not be guessed (table `{table}` does not exist); \
         register the binding explicitly on the ModelRegistry"
    )]
    Configuration {
        enum_name: &'static str,
        table: String,
    },

    /// Anything the backing store itself reports, propagated unchanged.
    #[error(transparent)]
    Store(#[from] rusqlite::Error),

    /// Filesystem trouble while opening the store.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True when the underlying store rejected a write on a uniqueness or
    /// primary-key constraint, e.g. seeding the same variant twice.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Store(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
