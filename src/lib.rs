//! timeago - relative time phrases for Rust
//!
//! Converts a point in time into a phrase such as "5 minutes ago",
//! "21 год назад" or "2 дні тому", choosing the grammatically correct word
//! form for the number.
//!
//! # Quick Start
//!
//! ```rust
//! use timeago::prelude::*;
//! use chrono::{Duration, Utc};
//!
//! let formatter = Formatter::new(Settings::default());
//! let now = Utc::now();
//!
//! assert_eq!(
//!     formatter.format_at(now - Duration::days(11), &Options::new(), now).unwrap(),
//!     "2 weeks ago"
//! );
//! assert_eq!(
//!     formatter.format_at(now - Duration::seconds(20), &Options::online(), now).unwrap(),
//!     "Online"
//! );
//! ```
//!
//! # Crates
//!
//! - [`timeago_core`] - bucketing, input coercion and the [`Formatter`]
//! - [`timeago_i18n`] - language tables, plural rules and the table cache
//! - [`timeago_config`] - [`Settings`] from code, environment or files
//! - [`timeago_log`] - `TIMEAGO_*` controlled logging

pub use timeago_config;
pub use timeago_core;
pub use timeago_i18n;
pub use timeago_log;

pub use timeago_config::{ConfigError, Settings, Tz};
pub use timeago_core::{
    Bucket, Formatter, Options, Resolution, Result, TimeInput, TimeagoError, bucketize, take,
};
pub use timeago_i18n::{
    DirectorySource, EmbeddedSource, I18nError, LanguageTable, TableCache, TableSource, Unit,
};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Bucket, DirectorySource, EmbeddedSource, Formatter, LanguageTable, Options, Result,
        Settings, TableCache, TimeInput, TimeagoError, Tz, Unit, bucketize, take,
    };
}
