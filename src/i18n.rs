//! Translation collaborator for enum labels.
//!
//! Label keys are resolved through a [`Translator`]; an unresolved key falls
//! back to the key itself so the UI always has something to render.

use std::collections::HashMap;

pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

/// Flat key -> text catalog.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Italian labels for the shipped enums.
    pub fn builtin_it() -> Self {
        let mut catalog = Self::new();
        for (key, text) in [
            ("enums.driving_license_renewal_statuses.pending_submit", "In attesa di invio"),
            ("enums.driving_license_renewal_statuses.pending_review", "In attesa di revisione"),
            ("enums.driving_license_renewal_statuses.approved", "Approvata"),
            ("enums.driving_license_renewal_statuses.changes_requested", "Modifiche richieste"),
            ("enums.driving_license_renewal_statuses.rejected", "Respinta"),
            ("enums.driving_license_renewal_statuses.completed", "Completata"),
        ] {
            catalog.insert(key, text);
        }
        catalog
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_key_falls_back_to_key() {
        let catalog = Catalog::new();
        assert_eq!(catalog.translate("enums.ghost.none"), "enums.ghost.none");
    }

    #[test]
    fn builtin_catalog_resolves_status_labels() {
        let catalog = Catalog::builtin_it();
        assert_eq!(
            catalog.translate("enums.driving_license_renewal_statuses.approved"),
            "Approvata"
        );
    }
}
