//! Persisted record types and the capabilities attached to them.

mod records;

pub use records::{DrivingLicenseCategory, DrivingLicenseRenewalStatus, RenewalRequest};

use rusqlite::Row;
use rusqlite::types::Value;

use crate::enums::DbEnum;

/// A row type backed by a single table with an integer primary key.
pub trait ModelRecord: Sized {
    const TABLE: &'static str;
    const RECORD_NAME: &'static str;

    /// Column names, primary key first, in table order.
    fn columns() -> &'static [&'static str];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn primary_key(&self) -> i64;

    /// Current column -> value pairs, aligned with [`Self::columns`]. Used
    /// for inserts and for the audit log's dirty-field comparison.
    fn field_values(&self) -> Vec<(&'static str, Value)>;
}

/// Lets a record resolve the enum variant sharing its primary key.
///
/// Absence is an expected outcome, not a failure: a row without a matching
/// variant yields `None`. Keys are compared as exact `i64`s, never coerced.
pub trait HasEnum: ModelRecord {
    type Enum: DbEnum;

    fn enum_case(&self) -> Option<Self::Enum> {
        Self::Enum::from_value(self.primary_key())
    }
}

/// Marker attaching the change audit log to a record type. Every audited
/// create/update/delete on such a record emits at most one activity entry.
pub trait Auditable: ModelRecord {}
