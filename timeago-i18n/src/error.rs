//! Error types for language table operations

use thiserror::Error;

/// Errors that can occur while loading or reading language tables.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Language identifier is empty or contains characters that cannot name a table
    #[error("Invalid language identifier: {0:?}")]
    InvalidLanguage(String),

    /// No table exists for the language in the source
    #[error("Language table for {language} not found at {path}")]
    TableNotFound { language: String, path: String },

    /// Table content parsed but does not describe a usable table
    #[error("Malformed language table for {language}: {reason}")]
    MalformedTable { language: String, reason: String },

    /// Table has no word at the form index the plural rule selected
    #[error("Language table {language} has no form {index} for {unit}")]
    MissingForm {
        language: String,
        unit: &'static str,
        index: usize,
    },

    /// Unit key not recognized
    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
