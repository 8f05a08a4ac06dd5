use rusqlite::Row;
use rusqlite::types::Value;

use super::{Auditable, HasEnum, ModelRecord};
use crate::enums::{DrivingLicenseCategories, DrivingLicenseRenewalStatuses};

/// One driving-license category row, keyed by the enum's integer value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DrivingLicenseCategory {
    pub id: i64,
    pub code: String,
    pub description: String,
}

impl ModelRecord for DrivingLicenseCategory {
    const TABLE: &'static str = "driving_license_categories";
    const RECORD_NAME: &'static str = "DrivingLicenseCategory";

    fn columns() -> &'static [&'static str] {
        &["id", "code", "description"]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            code: row.get(1)?,
            description: row.get(2)?,
        })
    }

    fn primary_key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Integer(self.id)),
            ("code", Value::Text(self.code.clone())),
            ("description", Value::Text(self.description.clone())),
        ]
    }
}

impl HasEnum for DrivingLicenseCategory {
    type Enum = DrivingLicenseCategories;
}

impl Auditable for DrivingLicenseCategory {}

/// One renewal-status row, keyed by the enum's integer value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DrivingLicenseRenewalStatus {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl ModelRecord for DrivingLicenseRenewalStatus {
    const TABLE: &'static str = "driving_license_renewal_statuses";
    const RECORD_NAME: &'static str = "DrivingLicenseRenewalStatus";

    fn columns() -> &'static [&'static str] {
        &["id", "name", "description"]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }

    fn primary_key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Integer(self.id)),
            ("name", Value::Text(self.name.clone())),
            ("description", Value::Text(self.description.clone())),
        ]
    }
}

impl HasEnum for DrivingLicenseRenewalStatus {
    type Enum = DrivingLicenseRenewalStatuses;
}

impl Auditable for DrivingLicenseRenewalStatus {}

/// A citizen's renewal request, the mutable aggregate this service
/// administers. `id` 0 means "not yet persisted"; the store assigns the key
/// on first audited insert.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RenewalRequest {
    pub id: i64,
    pub applicant: String,
    pub category_id: i64,
    pub status_id: i64,
    pub notes: String,
}

impl RenewalRequest {
    pub fn new(applicant: impl Into<String>, category_id: i64, status_id: i64) -> Self {
        Self {
            id: 0,
            applicant: applicant.into(),
            category_id,
            status_id,
            notes: String::new(),
        }
    }
}

impl ModelRecord for RenewalRequest {
    const TABLE: &'static str = "renewal_requests";
    const RECORD_NAME: &'static str = "RenewalRequest";

    fn columns() -> &'static [&'static str] {
        &["id", "applicant", "category_id", "status_id", "notes"]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            applicant: row.get(1)?,
            category_id: row.get(2)?,
            status_id: row.get(3)?,
            notes: row.get(4)?,
        })
    }

    fn primary_key(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Integer(self.id)),
            ("applicant", Value::Text(self.applicant.clone())),
            ("category_id", Value::Integer(self.category_id)),
            ("status_id", Value::Integer(self.status_id)),
            ("notes", Value::Text(self.notes.clone())),
        ]
    }
}

impl Auditable for RenewalRequest {}
