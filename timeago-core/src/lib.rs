//! Relative time formatting
//!
//! Turns a point in time into a phrase such as "5 minutes ago" or
//! "21 год назад":
//!
//! 1. the input ([`TimeInput`]) is resolved to an instant using the
//!    configured timezone,
//! 2. the elapsed seconds are [bucketed](bucketize) into a unit and a
//!    rounded magnitude,
//! 3. the language table picks the word form agreeing with the magnitude.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use timeago_config::{Settings, Tz};
//! use timeago_core::{Formatter, Options};
//!
//! let settings = Settings::new("ru", Tz::Europe__Kiev);
//! let formatter = Formatter::new(settings);
//!
//! let now = Utc::now();
//! let phrase = formatter
//!     .format_at(now - Duration::hours(5), &Options::new(), now)
//!     .unwrap();
//! assert_eq!(phrase, "5 часов назад");
//! ```

mod bucket;
mod error;
mod formatter;
mod input;
mod options;

pub use bucket::{Bucket, DAY, HOUR, MINUTE, MONTH, WEEK, YEAR, bucketize};
pub use error::TimeagoError;
pub use formatter::{Formatter, Resolution, elapsed_seconds, resolve, take};
pub use input::{DATETIME_FORMAT, OPTION_SEPARATOR, TimeInput, split_inline_option};
pub use options::{ONLINE, Options};

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, TimeagoError>;
