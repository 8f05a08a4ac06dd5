//! Naming convention between enums and their backing models, plus the
//! process-wide binding registry.
//!
//! The convention mirrors the usual ORM spelling: the record type is the
//! grammatical singular of the enum's short name, and the backing table is
//! the snake-cased enum name (`DrivingLicenseCategories` ->
//! `DrivingLicenseCategory` / `driving_license_categories`). The registry
//! makes every resolved binding explicit and cached; nothing is guessed
//! twice and nothing is guessed silently: an unverifiable guess is a
//! configuration error at first use.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::RwLock;

use rusqlite::Connection;

use crate::db::error::StoreError;
use crate::enums::DbEnum;

/// Resolved association between an enum type and its backing model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub enum_name: &'static str,
    pub record_name: String,
    pub table: String,
}

/// Lower snake-case form of a CamelCase type name.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Grammatical singular of an English type name ("Categories" -> "Category").
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Grammatical plural of an English type name ("Status" -> "Statuses").
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiou".contains(c.to_ascii_lowercase())) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| name.ends_with(suffix))
    {
        return format!("{name}es");
    }
    format!("{name}s")
}

/// Default binding derived purely from the enum's short name.
pub fn convention_binding(enum_name: &'static str) -> Binding {
    Binding {
        enum_name,
        record_name: singularize(enum_name),
        table: snake_case(enum_name),
    }
}

/// Explicit, injectable cache of enum -> model bindings.
///
/// Populated eagerly through `register*` or lazily on first `resolve`.
/// Resolution is a pure function of the type, so a redundant concurrent
/// first resolution just overwrites the cache with the identical value.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    bindings: RwLock<HashMap<TypeId, Binding>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the conventional binding for `E` up front.
    pub fn register<E: DbEnum>(&self) {
        self.insert::<E>(convention_binding(E::ENUM_NAME));
    }

    /// Override the backing table for `E`, taking precedence over the guess.
    pub fn register_table<E: DbEnum>(&self, table: impl Into<String>) {
        let mut binding = convention_binding(E::ENUM_NAME);
        binding.table = table.into();
        self.insert::<E>(binding);
    }

    /// Binding already registered or cached for `E`, if any.
    pub fn registered<E: DbEnum>(&self) -> Option<Binding> {
        self.bindings
            .read()
            .expect("registry lock poisoned")
            .get(&TypeId::of::<E>())
            .cloned()
    }

    /// Resolve the binding for `E`, guessing by convention on first use.
    ///
    /// A registered binding is trusted as-is. A guessed one is verified
    /// against the store before being cached; a guess whose table does not
    /// exist fails fast with [`StoreError::Configuration`].
    pub fn resolve<E: DbEnum>(&self, conn: &Connection) -> Result<Binding, StoreError> {
        if let Some(binding) = self.registered::<E>() {
            return Ok(binding);
        }
        let binding = convention_binding(E::ENUM_NAME);
        if !table_exists(conn, &binding.table)? {
            return Err(StoreError::Configuration {
                enum_name: E::ENUM_NAME,
                table: binding.table,
            });
        }
        self.insert::<E>(binding.clone());
        Ok(binding)
    }

    fn insert<E: DbEnum>(&self, binding: Binding) {
        self.bindings
            .write()
            .expect("registry lock poisoned")
            .insert(TypeId::of::<E>(), binding);
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool, StoreError> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map(Some)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(None),
            other => Err(other),
        })?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_cases_enum_names() {
        assert_eq!(
            snake_case("DrivingLicenseCategories"),
            "driving_license_categories"
        );
        assert_eq!(
            snake_case("DrivingLicenseRenewalStatuses"),
            "driving_license_renewal_statuses"
        );
    }

    #[test]
    fn singularizes_the_shipped_names() {
        assert_eq!(singularize("DrivingLicenseCategories"), "DrivingLicenseCategory");
        assert_eq!(singularize("DrivingLicenseRenewalStatuses"), "DrivingLicenseRenewalStatus");
        assert_eq!(singularize("Boxes"), "Box");
        assert_eq!(singularize("Jobs"), "Job");
        assert_eq!(singularize("Address"), "Address");
    }

    #[test]
    fn pluralize_inverts_singularize_for_the_shipped_names() {
        assert_eq!(pluralize("DrivingLicenseCategory"), "DrivingLicenseCategories");
        assert_eq!(pluralize("DrivingLicenseRenewalStatus"), "DrivingLicenseRenewalStatuses");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Batch"), "Batches");
    }

    #[test]
    fn convention_binding_covers_record_and_table() {
        let binding = convention_binding("DrivingLicenseCategories");
        assert_eq!(binding.record_name, "DrivingLicenseCategory");
        assert_eq!(binding.table, "driving_license_categories");
    }
}
