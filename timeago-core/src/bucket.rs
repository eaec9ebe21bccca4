//! Bucketing
//!
//! Maps an elapsed number of seconds to the finest unit whose rounded
//! magnitude stays under that unit's threshold. Calendar units use average
//! lengths, so "1 month" is 30.44 days and "1 year" is 365.2 days.

use timeago_i18n::Unit;

pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 3_600;
pub const DAY: u64 = 86_400;
pub const WEEK: u64 = 604_800;
pub const MONTH: u64 = 2_629_440;
pub const YEAR: u64 = 31_553_280;

/// A unit and the rounded count within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    pub unit: Unit,
    pub magnitude: u64,
}

impl Bucket {
    pub fn new(unit: Unit, magnitude: u64) -> Self {
        Self { unit, magnitude }
    }
}

/// `seconds / divisor`, rounded half away from zero.
#[inline]
fn rounded(seconds: u64, divisor: u64) -> u64 {
    seconds / divisor + u64::from(seconds % divisor * 2 >= divisor)
}

/// Pick the bucket for a non-negative elapsed time.
///
/// ```
/// use timeago_core::{Bucket, bucketize};
/// use timeago_i18n::Unit;
///
/// assert_eq!(bucketize(59), Bucket::new(Unit::Seconds, 59));
/// assert_eq!(bucketize(60), Bucket::new(Unit::Minutes, 1));
/// assert_eq!(bucketize(3_600), Bucket::new(Unit::Hours, 1));
/// ```
pub fn bucketize(seconds: u64) -> Bucket {
    if seconds < 60 {
        return Bucket::new(Unit::Seconds, seconds);
    }

    let minutes = rounded(seconds, MINUTE);
    if minutes < 60 {
        return Bucket::new(Unit::Minutes, minutes);
    }

    let hours = rounded(seconds, HOUR);
    if hours < 24 {
        return Bucket::new(Unit::Hours, hours);
    }

    let days = rounded(seconds, DAY);
    if days < 7 {
        return Bucket::new(Unit::Days, days);
    }

    let weeks = rounded(seconds, WEEK);
    if weeks < 4 {
        return Bucket::new(Unit::Weeks, weeks);
    }

    let months = rounded(seconds, MONTH);
    if months < 12 {
        return Bucket::new(Unit::Months, months.max(1));
    }

    Bucket::new(Unit::Years, rounded(seconds, YEAR))
}
