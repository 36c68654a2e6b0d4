// file: src/models/search_mode.rs
// description: discovery search modes and their field-qualified query strings

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Raw query, passed through to the search engine unchanged
    #[default]
    #[value(alias = "colecciones")]
    Collections,
    #[value(alias = "titulo")]
    Title,
    #[value(alias = "autor")]
    Author,
    /// Unquoted, so the caller supplies the exact index term or range
    #[value(alias = "fecha")]
    Date,
    #[value(alias = "materias")]
    Subjects,
    #[value(alias = "tipo")]
    Type,
    #[value(alias = "ods")]
    Sdg,
}

impl SearchMode {
    /// Metadata field the mode filters on; `None` for general searches.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SearchMode::Collections => None,
            SearchMode::Title => Some("dc.title"),
            SearchMode::Author => Some("dc.contributor.author"),
            SearchMode::Date => Some("dc.date.issued"),
            SearchMode::Subjects => Some("dc.subject"),
            SearchMode::Type => Some("dc.type"),
            SearchMode::Sdg => Some("dc.subject.ods"),
        }
    }

    pub fn build_query(&self, query: &str) -> String {
        match (self, self.field()) {
            (_, None) => query.to_string(),
            (SearchMode::Date, Some(field)) => format!("{}:{}", field, query),
            (_, Some(field)) => format!("{}:\"{}\"", field, query),
        }
    }
}

impl From<&str> for SearchMode {
    /// Lenient parse of form values; anything unrecognised is a general search.
    fn from(value: &str) -> Self {
        <SearchMode as ValueEnum>::from_str(value.trim(), true).unwrap_or_default()
    }
}
