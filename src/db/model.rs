//! Enum -> record lookups across the naming-convention bridge.

use super::{Database, StoreError};
use crate::enums::HasModel;
use crate::models::ModelRecord;

impl Database {
    /// Record backing the given enum variant, looked up by the variant's
    /// value in the resolved table.
    ///
    /// Strict: an absent row is a [`StoreError::NotFound`], an unresolvable
    /// binding a [`StoreError::Configuration`]. Compare with
    /// `HasEnum::enum_case`, the lenient direction.
    pub async fn model_for<E: HasModel>(&self, case: E) -> Result<E::Record, StoreError> {
        use crate::enums::DbEnum;

        let conn = self.conn.lock().await;
        let binding = self.registry.resolve::<E>(&conn)?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            E::Record::columns().join(", "),
            binding.table
        );
        conn.query_row(&sql, [case.value()], |row| E::Record::from_row(row))
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound {
                    record: E::Record::RECORD_NAME,
                    id: case.value(),
                },
                other => other.into(),
            })
    }

    /// Point lookup by primary key on a record's own table.
    pub async fn find<R: ModelRecord>(&self, id: i64) -> Result<Option<R>, StoreError> {
        let conn = self.conn.lock().await;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            R::columns().join(", "),
            R::TABLE
        );
        match conn.query_row(&sql, [id], |row| R::from_row(row)) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{DbEnum, DrivingLicenseCategories, DrivingLicenseRenewalStatuses};
    use crate::models::{DrivingLicenseCategory, HasEnum};

    async fn seeded_db() -> Database {
        let db = Database::open_in_memory().await.expect("in-memory db");
        db.seed(DrivingLicenseCategories::cases()).await.expect("seed categories");
        db.seed(DrivingLicenseRenewalStatuses::cases()).await.expect("seed statuses");
        db
    }

    #[tokio::test]
    async fn model_for_returns_the_row_sharing_the_variant_value() {
        let db = seeded_db().await;
        let record = db.model_for(DrivingLicenseCategories::B).await.unwrap();
        assert_eq!(record.id, DrivingLicenseCategories::B.value());
        assert_eq!(record.code, "B");
        assert_eq!(record.description, DrivingLicenseCategories::B.description());
    }

    #[tokio::test]
    async fn model_for_on_a_missing_row_is_not_found() {
        let db = Database::open_in_memory().await.unwrap();
        // Tables exist but are unseeded.
        let err = db
            .model_for(DrivingLicenseRenewalStatuses::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 3, .. }), "got {err}");
    }

    #[tokio::test]
    async fn find_round_trips_through_enum_case() {
        let db = seeded_db().await;
        let record = db
            .find::<crate::models::DrivingLicenseRenewalStatus>(2)
            .await
            .unwrap()
            .expect("seeded row");
        assert_eq!(
            record.enum_case(),
            Some(DrivingLicenseRenewalStatuses::PendingReview)
        );
        assert!(db
            .find::<crate::models::DrivingLicenseRenewalStatus>(42)
            .await
            .unwrap()
            .is_none());
    }

    // An enum whose conventional table does not exist; exercises both the
    // fail-fast configuration path and the explicit override.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Prefectures {
        Milano,
    }

    impl DbEnum for Prefectures {
        const ENUM_NAME: &'static str = "Prefectures";

        fn cases() -> &'static [Self] {
            &[Prefectures::Milano]
        }

        fn value(self) -> i64 {
            6
        }

        fn name(self) -> &'static str {
            "MILANO"
        }

        fn description(self) -> &'static str {
            "Prefettura di Milano"
        }
    }

    impl crate::enums::HasModel for Prefectures {
        type Record = DrivingLicenseCategory;
    }

    #[tokio::test]
    async fn unguessable_binding_fails_fast_with_configuration_error() {
        let db = Database::open_in_memory().await.unwrap();
        let err = db.model_for(Prefectures::Milano).await.unwrap_err();
        match err {
            StoreError::Configuration { enum_name, table } => {
                assert_eq!(enum_name, "Prefectures");
                assert_eq!(table, "prefectures");
            }
            other => panic!("expected configuration error, got {other}"),
        }
    }

    #[tokio::test]
    async fn explicit_table_registration_overrides_the_guess() {
        let db = seeded_db().await;
        db.registry()
            .register_table::<Prefectures>("driving_license_categories");
        let record = db.model_for(Prefectures::Milano).await.unwrap();
        assert_eq!(record.id, 6);
        assert_eq!(record.code, "B");
    }

    #[tokio::test]
    async fn resolution_is_cached_after_first_use() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.registry().registered::<DrivingLicenseCategories>().is_none());

        // Table exists but is unseeded: the lookup misses, yet the binding
        // it resolved on the way is kept.
        let err = db.model_for(DrivingLicenseCategories::AM).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        let binding = db
            .registry()
            .registered::<DrivingLicenseCategories>()
            .expect("cached after first resolve");
        assert_eq!(binding.table, "driving_license_categories");
        assert_eq!(binding.record_name, "DrivingLicenseCategory");
    }
}
