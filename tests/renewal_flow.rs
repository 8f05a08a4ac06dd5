//! End-to-end flow: install, seed, look rows up across the enum bridge,
//! drive a renewal request through its statuses with the audit log on.

use patente::db::{Database, StoreError};
use patente::enums::{DbEnum, DrivingLicenseCategories, DrivingLicenseRenewalStatuses};
use patente::i18n::Catalog;
use patente::models::{HasEnum, ModelRecord, RenewalRequest};

#[tokio::test]
async fn full_administration_flow() {
    let db = Database::open_in_memory().await.expect("in-memory db");
    db.registry().register::<DrivingLicenseCategories>();
    db.registry().register::<DrivingLicenseRenewalStatuses>();

    // Seed the full regulatory sets.
    assert_eq!(db.seed(DrivingLicenseCategories::cases()).await.unwrap(), 15);
    assert_eq!(db.seed(DrivingLicenseRenewalStatuses::cases()).await.unwrap(), 6);

    // Select options come back in declaration order, one per variant.
    let catalog = Catalog::builtin_it();
    let options = DrivingLicenseRenewalStatuses::to_select_options(&catalog);
    assert_eq!(
        options.iter().map(|(v, _)| *v).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );

    // Enum -> record lookup is strict, record -> enum is lenient.
    let status_row = db
        .model_for(DrivingLicenseRenewalStatuses::PendingSubmit)
        .await
        .unwrap();
    assert_eq!(status_row.id, 1);
    assert_eq!(
        status_row.enum_case(),
        Some(DrivingLicenseRenewalStatuses::PendingSubmit)
    );

    // A request moves from submit to review; each transition audits once.
    let request = RenewalRequest::new(
        "Giulia Verdi",
        DrivingLicenseCategories::B.value(),
        DrivingLicenseRenewalStatuses::PendingSubmit.value(),
    );
    let id = db.create_audited(&request, Some("portal")).await.unwrap();

    let mut request = db.find::<RenewalRequest>(id).await.unwrap().unwrap();
    request.status_id = DrivingLicenseRenewalStatuses::PendingReview.value();
    db.update_audited(&request, Some("admin")).await.unwrap();

    // Saving again without changes leaves the log alone.
    db.update_audited(&request, Some("admin")).await.unwrap();

    let entries = db.activity_for(RenewalRequest::TABLE, id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].event, "created");
    assert_eq!(entries[1].event, "updated");
    assert_eq!(
        entries[1].changes.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["status_id"]
    );

    // Re-seeding collides on the primary key and changes nothing.
    let err = db
        .seed(&[DrivingLicenseRenewalStatuses::PendingSubmit])
        .await
        .unwrap_err();
    assert!(matches!(&err, StoreError::Store(_)) && err.is_constraint_violation());
    assert_eq!(
        db.model_for(DrivingLicenseRenewalStatuses::PendingSubmit)
            .await
            .unwrap()
            .name,
        "PENDING_SUBMIT"
    );
}
