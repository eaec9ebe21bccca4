//! Language tables and pluralization for timeago
//!
//! - **Language tables**: per-language word forms for each time unit, plus
//!   the "ago" suffix and the "online" phrase
//! - **Pluralization**: the number of forms a unit declares picks the rule
//!   (singular/plural or Slavic one/few/many)
//! - **Sources**: tables embedded in the crate or read from a directory
//! - **Cache**: a thread-safe, process-wide cache of parsed tables
//!
//! # Quick Start
//!
//! ```rust
//! use timeago_i18n::{EmbeddedSource, Unit, cache};
//!
//! let ru = cache::global().get_or_load(&EmbeddedSource, "ru").unwrap();
//! assert_eq!(ru.phrase(Unit::Days, 21).unwrap(), "21 день назад");
//! ```
//!
//! # Table Format
//!
//! ```json
//! {
//!     "ago": "ago",
//!     "online": "Online",
//!     "seconds": { "0": "second", "1": "seconds" },
//!     "minutes": { "0": "minute", "1": "minutes" },
//!     "hours": { "0": "hour", "1": "hours" },
//!     "days": { "0": "day", "1": "days" },
//!     "weeks": { "0": "week", "1": "weeks" },
//!     "months": { "0": "month", "1": "months" },
//!     "years": { "0": "year", "1": "years" }
//! }
//! ```

pub mod cache;
mod error;
mod plural;
mod source;
mod table;
mod unit;

pub use cache::TableCache;
pub use error::I18nError;
pub use plural::{
    DefaultPlurals, NoPlurals, PluralCategory, PluralRules, SlavicPlurals, form_index, last_digit,
    rules_for_forms,
};
pub use source::{DirectorySource, EmbeddedSource, TableSource, validate_language};
pub use table::LanguageTable;
pub use unit::Unit;

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;
