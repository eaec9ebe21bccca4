//! Error types for formatting

use thiserror::Error;
use timeago_i18n::I18nError;

/// Errors that can occur while producing a phrase.
#[derive(Debug, Error)]
pub enum TimeagoError {
    /// Language table could not be loaded or read
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Input could not be turned into a point in time
    #[error("Invalid date/time {input:?}: {reason}")]
    InvalidDateTime { input: String, reason: String },

    /// Wall-clock time skipped by a DST transition
    #[error("{input} does not exist in {timezone}")]
    NonexistentLocalTime { input: String, timezone: String },
}
