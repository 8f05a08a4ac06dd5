//! Closed regulatory enumerations and the capabilities attached to them.
//!
//! Each enum is integer-backed; the integer is stable and doubles as the
//! primary key of the enum's backing table. Descriptions are exhaustive
//! `match`es, so adding a variant without its text is a compile error.

mod categories;
mod statuses;

pub use categories::DrivingLicenseCategories;
pub use statuses::DrivingLicenseRenewalStatuses;

use rand::Rng;
use rusqlite::types::Value;

use crate::conventions::snake_case;
use crate::i18n::Translator;
use crate::models::ModelRecord;

/// An integer-backed enum with a fixed variant set.
pub trait DbEnum: Copy + Sized + 'static {
    /// Short type name the naming convention operates on.
    const ENUM_NAME: &'static str;

    /// All variants, in declaration order. Fixed at compile time.
    fn cases() -> &'static [Self];

    /// Stable integer value, used as the backing table's primary key.
    fn value(self) -> i64;

    /// Variant name as declared.
    fn name(self) -> &'static str;

    /// Human-readable description. Implemented as an exhaustive match.
    fn description(self) -> &'static str;

    fn from_value(value: i64) -> Option<Self> {
        Self::cases().iter().copied().find(|c| c.value() == value)
    }

    /// Uniformly random variant. Convenience for fixtures and demo data,
    /// not a security primitive.
    fn random() -> Self {
        let cases = Self::cases();
        cases[rand::thread_rng().gen_range(0..cases.len())]
    }

    /// Namespaced i18n key, e.g.
    /// `enums.driving_license_renewal_statuses.pending_submit`.
    fn label_key(self) -> String {
        format!(
            "enums.{}.{}",
            snake_case(Self::ENUM_NAME),
            self.name().to_lowercase()
        )
    }

    fn label(self, translator: &impl Translator) -> String {
        translator.translate(&self.label_key())
    }

    /// Value -> label pairs for select inputs, in declaration order.
    fn to_select_options(translator: &impl Translator) -> Vec<(i64, String)> {
        Self::cases()
            .iter()
            .map(|case| (case.value(), case.label(translator)))
            .collect()
    }
}

/// Ties an enum to the record type persisted in its backing table.
pub trait HasModel: DbEnum {
    type Record: ModelRecord;
}

/// Lets an enum's variants be materialized as rows of its backing table.
pub trait SeedDb: DbEnum {
    /// Explicit table name, taking precedence over the registry and the
    /// convention-derived fallback.
    const TABLE_OVERRIDE: Option<&'static str> = None;

    /// Ordered column -> value mapping for one variant's row.
    fn db_map(self) -> Vec<(&'static str, Value)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use std::collections::HashMap;

    #[test]
    fn every_category_has_a_description() {
        for case in DrivingLicenseCategories::cases() {
            assert!(
                !case.description().is_empty(),
                "category {} has an empty description",
                case.name()
            );
        }
    }

    #[test]
    fn every_status_has_a_description() {
        for case in DrivingLicenseRenewalStatuses::cases() {
            assert!(!case.description().is_empty());
        }
    }

    #[test]
    fn values_are_injective_and_round_trip() {
        let mut seen = HashMap::new();
        for case in DrivingLicenseCategories::cases() {
            assert!(seen.insert(case.value(), case.name()).is_none());
            assert_eq!(
                DrivingLicenseCategories::from_value(case.value()).map(|c| c.name()),
                Some(case.name())
            );
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn from_value_rejects_unknown_keys() {
        assert!(DrivingLicenseRenewalStatuses::from_value(0).is_none());
        assert!(DrivingLicenseRenewalStatuses::from_value(99).is_none());
    }

    #[test]
    fn label_key_is_lowercased_and_namespaced() {
        assert_eq!(
            DrivingLicenseRenewalStatuses::PendingSubmit.label_key(),
            "enums.driving_license_renewal_statuses.pending_submit"
        );
        assert_eq!(
            DrivingLicenseCategories::C1E.label_key(),
            "enums.driving_license_categories.c1e"
        );
    }

    #[test]
    fn select_options_preserve_declaration_order() {
        let catalog = Catalog::builtin_it();
        let options = DrivingLicenseRenewalStatuses::to_select_options(&catalog);
        assert_eq!(options.len(), 6);
        assert_eq!(
            options.iter().map(|(v, _)| *v).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(options[0].1, "In attesa di invio");
        assert_eq!(options[5].1, "Completata");
    }

    #[test]
    fn select_options_fall_back_to_keys_without_a_catalog() {
        let catalog = Catalog::new();
        let options = DrivingLicenseCategories::to_select_options(&catalog);
        assert_eq!(options.len(), 15);
        assert_eq!(options[0].1, "enums.driving_license_categories.am");
    }

    #[test]
    fn random_covers_the_variant_set_roughly_uniformly() {
        let mut counts: HashMap<i64, u32> = HashMap::new();
        for _ in 0..10_000 {
            *counts
                .entry(DrivingLicenseRenewalStatuses::random().value())
                .or_default() += 1;
        }
        assert_eq!(counts.len(), 6, "all six variants should appear");
        for (&value, &n) in &counts {
            // Expected ~1667 each; allow a generous band.
            assert!(
                (1200..=2200).contains(&n),
                "variant {value} drawn {n} times out of 10000"
            );
        }
    }
}
