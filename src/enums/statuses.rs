//! Lifecycle statuses of a driving-license renewal request.

use rusqlite::types::Value;

use super::{DbEnum, HasModel, SeedDb};
use crate::models::DrivingLicenseRenewalStatus;
use crate::theme::{self, ColorRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrivingLicenseRenewalStatuses {
    PendingSubmit,
    PendingReview,
    Approved,
    ChangesRequested,
    Rejected,
    Completed,
}

use DrivingLicenseRenewalStatuses::*;

const CASES: &[DrivingLicenseRenewalStatuses] = &[
    PendingSubmit,
    PendingReview,
    Approved,
    ChangesRequested,
    Rejected,
    Completed,
];

impl DbEnum for DrivingLicenseRenewalStatuses {
    const ENUM_NAME: &'static str = "DrivingLicenseRenewalStatuses";

    fn cases() -> &'static [Self] {
        CASES
    }

    fn value(self) -> i64 {
        match self {
            PendingSubmit => 1,
            PendingReview => 2,
            Approved => 3,
            ChangesRequested => 4,
            Rejected => 5,
            Completed => 6,
        }
    }

    fn name(self) -> &'static str {
        match self {
            PendingSubmit => "PENDING_SUBMIT",
            PendingReview => "PENDING_REVIEW",
            Approved => "APPROVED",
            ChangesRequested => "CHANGES_REQUESTED",
            Rejected => "REJECTED",
            Completed => "COMPLETED",
        }
    }

    fn description(self) -> &'static str {
        match self {
            PendingSubmit => "La richiesta è in attesa di essere compilata e inviata dall'utente.",
            PendingReview => "La richiesta è in attesa di revisione da parte di un amministratore.",
            Approved => "La richiesta è stata approvata, ma l'iter di rinnovo è ancora in corso.",
            ChangesRequested => "La richiesta è stata revisionata, ma sono stati richiesti cambiamenti o correzioni a i dati.",
            Rejected => "La richiesta è stata revisionata e respinta, l'iter di rinnovo non verrà iniziato.",
            Completed => "La richiesta è stata approvata e l'iter di rinnovo concluso.",
        }
    }
}

impl DrivingLicenseRenewalStatuses {
    /// Badge palette for the status, opaque to this layer.
    pub fn badge_color(self) -> ColorRef {
        match self {
            PendingSubmit => theme::ORANGE,
            PendingReview => theme::YELLOW,
            Approved => theme::GREEN,
            ChangesRequested => theme::PURPLE,
            Rejected => theme::RED,
            Completed => theme::SKY,
        }
    }
}

impl HasModel for DrivingLicenseRenewalStatuses {
    type Record = DrivingLicenseRenewalStatus;
}

impl SeedDb for DrivingLicenseRenewalStatuses {
    fn db_map(self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Integer(self.value())),
            ("name", Value::Text(self.name().to_string())),
            ("description", Value::Text(self.description().to_string())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_are_distinct_per_status() {
        let palettes: Vec<_> = DrivingLicenseRenewalStatuses::cases()
            .iter()
            .map(|s| s.badge_color().as_ptr())
            .collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in &palettes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn db_map_carries_id_name_description_in_order() {
        let row = DrivingLicenseRenewalStatuses::PendingReview.db_map();
        let columns: Vec<_> = row.iter().map(|(c, _)| *c).collect();
        assert_eq!(columns, vec!["id", "name", "description"]);
        assert_eq!(row[0].1, Value::Integer(2));
    }
}
