//! Time units shared by the bucketizer and the language tables.

use crate::{I18nError, Result};
use std::fmt;
use std::str::FromStr;

/// A coarse time unit a phrase is expressed in.
///
/// Ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl Unit {
    /// Every unit, finest first.
    pub const ALL: [Unit; 7] = [
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Weeks,
        Unit::Months,
        Unit::Years,
    ];

    /// Key used for this unit in table files.
    pub fn key(&self) -> &'static str {
        match self {
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Unit {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.key() == s)
            .ok_or_else(|| I18nError::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_keys_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.key().parse::<Unit>().unwrap(), unit);
        }
        assert!("fortnights".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_order() {
        assert!(Unit::Seconds < Unit::Minutes);
        assert!(Unit::Months < Unit::Years);
        assert_eq!(Unit::Years.index(), 6);
    }
}
