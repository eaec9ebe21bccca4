//! Phrase Formatting
//!
//! [`Formatter`] turns a [`TimeInput`] into a phrase using the language and
//! timezone from its [`Settings`]. Tables are fetched through a
//! [`TableCache`], the process-wide one unless another is supplied.

use crate::{Bucket, Options, Result, TimeInput, bucketize};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use timeago_config::Settings;
use timeago_i18n::{EmbeddedSource, LanguageTable, TableCache, TableSource, Unit, cache};
use timeago_log::trace;

/// What an elapsed time is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The language's "online" phrase
    Online,
    /// A numeric phrase
    Bucket(Bucket),
}

/// Decide how to render `elapsed` seconds.
///
/// A negative elapsed time (target in the future) is always zero seconds,
/// even with the online option. Otherwise the online option replaces any
/// sub-minute phrase.
pub fn resolve(elapsed: i64, options: &Options) -> Resolution {
    let resolution = if elapsed < 0 {
        Resolution::Bucket(Bucket::new(Unit::Seconds, 0))
    } else if elapsed < 60 && options.is_online() {
        Resolution::Online
    } else {
        Resolution::Bucket(bucketize(elapsed.unsigned_abs()))
    };

    trace!(target: "timeago::bucket", "{}s -> {:?}", elapsed, resolution);
    resolution
}

/// Whole seconds from `then` to `now`, truncated toward zero.
pub fn elapsed_seconds(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_seconds()
}

#[derive(Clone)]
enum CacheHandle {
    Global,
    Owned(Arc<TableCache>),
}

impl CacheHandle {
    fn get(&self) -> &TableCache {
        match self {
            CacheHandle::Global => cache::global(),
            CacheHandle::Owned(cache) => cache,
        }
    }
}

/// Produces relative time phrases for one language and timezone.
///
/// ```
/// use chrono::{Duration, Utc};
/// use timeago_config::Settings;
/// use timeago_core::{Formatter, Options};
///
/// let formatter = Formatter::new(Settings::default());
/// let now = Utc::now();
///
/// let phrase = formatter
///     .format_at(now - Duration::minutes(5), &Options::new(), now)
///     .unwrap();
/// assert_eq!(phrase, "5 minutes ago");
/// ```
#[derive(Clone)]
pub struct Formatter {
    settings: Settings,
    source: Arc<dyn TableSource>,
    cache: CacheHandle,
}

impl Formatter {
    /// Formatter using the built-in tables and the process-wide cache.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            source: Arc::new(EmbeddedSource),
            cache: CacheHandle::Global,
        }
    }

    /// Load tables from `source` instead of the built-in ones.
    pub fn with_source(mut self, source: impl TableSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Use a private cache instead of the process-wide one.
    pub fn with_cache(mut self, cache: Arc<TableCache>) -> Self {
        self.cache = CacheHandle::Owned(cache);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The table for the configured language, loaded on first use.
    pub fn table(&self) -> Result<Arc<LanguageTable>> {
        let table = self
            .cache
            .get()
            .get_or_load(self.source.as_ref(), self.settings.language())?;
        Ok(table)
    }

    /// Describe `input` relative to the current time.
    pub fn format(&self, input: impl Into<TimeInput>, options: &Options) -> Result<String> {
        self.format_at(input, options, Utc::now())
    }

    /// Describe `input` relative to `now`.
    ///
    /// An option embedded in a text input (`"2017-02-01 00:00:00|online"`)
    /// is added to `options`.
    pub fn format_at(
        &self,
        input: impl Into<TimeInput>,
        options: &Options,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let input = input.into();

        let options = match input.inline_option() {
            Some(option) => Cow::Owned(options.clone().with(option)),
            None => Cow::Borrowed(options),
        };

        let then = input.to_utc(self.settings.timezone())?;
        self.format_elapsed(elapsed_seconds(then, now), &options)
    }

    /// Describe an elapsed number of seconds.
    pub fn format_elapsed(&self, elapsed: i64, options: &Options) -> Result<String> {
        let table = self.table()?;

        match resolve(elapsed, options) {
            Resolution::Online => Ok(table.online().to_string()),
            Resolution::Bucket(bucket) => Ok(table.phrase(bucket.unit, bucket.magnitude)?),
        }
    }

    /// Phrase for an already bucketed magnitude, e.g. `(Days, 11)` -> `"11 days ago"`.
    pub fn words_for(&self, unit: Unit, magnitude: u64) -> Result<String> {
        Ok(self.table()?.phrase(unit, magnitude)?)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("settings", &self.settings)
            .field(
                "cache",
                &match self.cache {
                    CacheHandle::Global => "global",
                    CacheHandle::Owned(_) => "owned",
                },
            )
            .finish()
    }
}

/// One-shot formatting with the built-in tables.
///
/// ```
/// use timeago_config::Settings;
/// use timeago_core::{Options, take};
///
/// let phrase = take(0i64, &Options::new(), &Settings::default()).unwrap();
/// assert!(phrase.ends_with("years ago"));
/// ```
pub fn take(input: impl Into<TimeInput>, options: &Options, settings: &Settings) -> Result<String> {
    Formatter::new(settings.clone()).format(input, options)
}
