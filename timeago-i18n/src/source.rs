//! Table Sources
//!
//! Where language tables come from. [`EmbeddedSource`] serves the tables
//! compiled into the crate; [`DirectorySource`] reads `<root>/<language>.json`.

use crate::{I18nError, LanguageTable, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A place language tables can be loaded from.
pub trait TableSource: Send + Sync {
    /// Cache key identifying `language` within this source.
    fn key(&self, language: &str) -> String;

    /// Load and parse the table for `language`.
    fn load(&self, language: &str) -> Result<LanguageTable>;
}

/// Reject identifiers that could escape a table directory or name nothing.
pub fn validate_language(language: &str) -> Result<()> {
    let valid = !language.is_empty()
        && language.len() <= 16
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(I18nError::InvalidLanguage(language.to_string()))
    }
}

/// Tables shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    const TABLES: &'static [(&'static str, &'static str)] = &[
        ("en", include_str!("../locales/en.json")),
        ("ru", include_str!("../locales/ru.json")),
        ("uk", include_str!("../locales/uk.json")),
    ];

    /// Language identifiers with a built-in table.
    pub fn languages() -> impl Iterator<Item = &'static str> {
        Self::TABLES.iter().map(|(language, _)| *language)
    }

    fn raw(language: &str) -> Option<&'static str> {
        Self::TABLES
            .iter()
            .find(|(name, _)| *name == language)
            .map(|(_, json)| *json)
    }
}

impl TableSource for EmbeddedSource {
    fn key(&self, language: &str) -> String {
        format!("embedded:{}", language)
    }

    fn load(&self, language: &str) -> Result<LanguageTable> {
        validate_language(language)?;

        let json = Self::raw(language).ok_or_else(|| I18nError::TableNotFound {
            language: language.to_string(),
            path: self.key(language),
        })?;

        LanguageTable::from_json(language, json)
    }
}

/// Tables stored as `<root>/<language>.json` files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the tables are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a language's table.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.root.join(format!("{}.json", language))
    }
}

impl TableSource for DirectorySource {
    fn key(&self, language: &str) -> String {
        self.path_for(language).display().to_string()
    }

    fn load(&self, language: &str) -> Result<LanguageTable> {
        validate_language(language)?;

        let path = self.path_for(language);
        if !path.is_file() {
            return Err(I18nError::TableNotFound {
                language: language.to_string(),
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path)?;
        LanguageTable::from_json(language, &content)
    }
}
