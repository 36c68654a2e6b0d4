// file: src/labels/mod.rs
// description: metadata field to display label translation
// reference: exact, case-sensitive lookup with identity fallback

pub mod dublin_core;

use crate::config::LabelRule;
use dublin_core::DEFAULT_LABELS;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    static ref DEFAULT_TABLE: TranslationTable = TranslationTable::builtin();
}

/// Read-only mapping from metadata field identifiers to display labels.
///
/// Built once at start-up; there is no way to change a table after construction.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn builtin() -> Self {
        let entries = DEFAULT_LABELS
            .iter()
            .map(|(field, label)| (field.to_string(), label.to_string()))
            .collect();
        Self { entries }
    }

    /// Built-in entries plus configured rules; a rule for an existing field replaces its label.
    pub fn with_overrides(rules: &[LabelRule]) -> Self {
        let mut table = Self::builtin();
        for rule in rules {
            debug!("Label override: {} -> {}", rule.field, rule.label);
            table.entries.insert(rule.field.clone(), rule.label.clone());
        }
        table
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Translates with the process-wide built-in table.
pub fn translate(key: &str) -> &str {
    DEFAULT_TABLE.translate(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_key_maps_to_its_label() {
        for (field, label) in DEFAULT_LABELS {
            assert_eq!(translate(field), *label);
        }
    }

    #[test]
    fn test_documented_labels() {
        assert_eq!(translate("dc.title"), "Título");
        assert_eq!(translate("dc.contributor.author"), "Autor(es)");
        assert_eq!(translate("dc.date.issued"), "Fecha de Publicación");
        assert_eq!(translate("dspace.entity.type"), "Tipo de Entidad");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        assert_eq!(translate("dc.coverage.spatial"), "dc.coverage.spatial");
        assert_eq!(translate(""), "");
        assert_eq!(translate("DC.TITLE"), "DC.TITLE");
        assert_eq!(translate("dc.title "), "dc.title ");
        assert_eq!(translate("dc.contributor"), "dc.contributor");
    }

    #[test]
    fn test_table_size_and_unique_fields() {
        let table = TranslationTable::builtin();
        assert_eq!(table.len(), DEFAULT_LABELS.len());
        assert_eq!(table.len(), 43);
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let rules = vec![
            LabelRule {
                field: "dc.subject.ods".to_string(),
                label: "Objetivo ODS".to_string(),
            },
            LabelRule {
                field: "dc.coverage.spatial".to_string(),
                label: "Cobertura".to_string(),
            },
        ];
        let table = TranslationTable::with_overrides(&rules);

        assert_eq!(table.translate("dc.subject.ods"), "Objetivo ODS");
        assert_eq!(table.translate("dc.coverage.spatial"), "Cobertura");
        assert_eq!(table.translate("dc.title"), "Título");
        assert_eq!(translate("dc.subject.ods"), "ODS");
    }
}
