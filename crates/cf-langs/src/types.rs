//! Shared types for the language scraper.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tables::extension_for;

/// Language id to display name, as scraped from the submit page.
pub type LangMap = HashMap<String, String>;

/// A single judge language, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Judge-specific id (numeric, kept as a string).
    pub id: String,
    /// Label shown in the judge's language selector.
    pub name: String,
    /// Source-file extension, when the name matches a known prefix.
    pub extension: Option<String>,
}

impl Language {
    /// Build an entry, resolving the extension from the display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let extension = extension_for(&name).map(str::to_string);
        Self {
            id: id.into(),
            name,
            extension,
        }
    }
}

/// Flatten a [`LangMap`] into entries ordered by numeric id.
///
/// Ids that do not parse as numbers sort after the numeric ones, by text.
pub fn languages(map: &LangMap) -> Vec<Language> {
    let mut entries: Vec<Language> = map
        .iter()
        .map(|(id, name)| Language::new(id.as_str(), name.as_str()))
        .collect();
    entries.sort_by(|a, b| sort_key(&a.id).cmp(&sort_key(&b.id)));
    entries
}

fn sort_key(id: &str) -> (bool, u64, &str) {
    match id.parse::<u64>() {
        Ok(n) => (false, n, id),
        Err(_) => (true, 0, id),
    }
}

/// Errors that can occur while fetching or extracting the language list.
#[derive(thiserror::Error, Debug)]
pub enum LangError {
    #[error("Cannot find language selection")]
    BlockNotFound,

    #[error("Cannot find any language")]
    NoLanguages,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience result type.
pub type LangResult<T> = Result<T, LangError>;
