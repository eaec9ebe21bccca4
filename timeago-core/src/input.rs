//! Time Input
//!
//! The three shapes a point in time can be given in, and how each becomes a
//! UTC instant.

use crate::{Result, TimeagoError};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::time::SystemTime;
use timeago_log::warn;

/// Layout of [`TimeInput::Text`] values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between a text date and an inline option (`"2017-02-01 00:00:00|online"`).
pub const OPTION_SEPARATOR: char = '|';

/// A point in time to describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    /// Seconds since the Unix epoch
    Timestamp(i64),
    /// An instant with its offset
    DateTime(DateTime<FixedOffset>),
    /// `YYYY-MM-DD HH:MM:SS` wall-clock time in the configured timezone,
    /// optionally followed by `|option`
    Text(String),
}

impl From<i64> for TimeInput {
    fn from(timestamp: i64) -> Self {
        TimeInput::Timestamp(timestamp)
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        TimeInput::Text(text.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        TimeInput::Text(text)
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for TimeInput {
    fn from(datetime: DateTime<Z>) -> Self {
        TimeInput::DateTime(datetime.fixed_offset())
    }
}

impl From<SystemTime> for TimeInput {
    fn from(time: SystemTime) -> Self {
        DateTime::<Utc>::from(time).into()
    }
}

/// Split `"<date>|<option>"` into its parts.
///
/// ```
/// use timeago_core::split_inline_option;
///
/// assert_eq!(
///     split_inline_option("2017-02-01 00:00:00|online"),
///     ("2017-02-01 00:00:00", Some("online"))
/// );
/// assert_eq!(split_inline_option("2017-02-01 00:00:00"), ("2017-02-01 00:00:00", None));
/// ```
pub fn split_inline_option(text: &str) -> (&str, Option<&str>) {
    match text.split_once(OPTION_SEPARATOR) {
        Some((date, option)) => {
            let option = option.trim();
            (date.trim(), (!option.is_empty()).then_some(option))
        }
        None => (text.trim(), None),
    }
}

impl TimeInput {
    /// Option carried inside a text input, if any.
    pub fn inline_option(&self) -> Option<&str> {
        match self {
            TimeInput::Text(text) => split_inline_option(text).1,
            _ => None,
        }
    }

    /// Resolve to a UTC instant; text is read as wall-clock time in `timezone`.
    ///
    /// A wall-clock time repeated by a DST transition resolves to its
    /// earlier occurrence. One skipped by a transition is an error.
    pub fn to_utc(&self, timezone: Tz) -> Result<DateTime<Utc>> {
        match self {
            TimeInput::Timestamp(timestamp) => {
                DateTime::from_timestamp(*timestamp, 0).ok_or_else(|| {
                    TimeagoError::InvalidDateTime {
                        input: timestamp.to_string(),
                        reason: "timestamp out of range".to_string(),
                    }
                })
            }
            TimeInput::DateTime(datetime) => Ok(datetime.with_timezone(&Utc)),
            TimeInput::Text(text) => parse_local(text, timezone),
        }
    }
}

fn parse_local(text: &str, timezone: Tz) -> Result<DateTime<Utc>> {
    let (date, _) = split_inline_option(text);

    let naive = NaiveDateTime::parse_from_str(date, DATETIME_FORMAT).map_err(|e| {
        TimeagoError::InvalidDateTime {
            input: text.to_string(),
            reason: format!("expected YYYY-MM-DD HH:MM:SS ({})", e),
        }
    })?;

    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => {
            warn!(
                target: "timeago::input",
                "{} is ambiguous in {}, using the earlier instant",
                date,
                timezone.name()
            );
            Ok(earliest.with_timezone(&Utc))
        }
        LocalResult::None => Err(TimeagoError::NonexistentLocalTime {
            input: date.to_string(),
            timezone: timezone.name().to_string(),
        }),
    }
}
