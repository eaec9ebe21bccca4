//! Per-call formatting options.

use std::collections::BTreeSet;

/// Replace sub-minute phrases with the language's "online" phrase.
pub const ONLINE: &str = "online";

/// Free-form string flags for a single formatting call.
///
/// Unknown flags are kept and ignored.
///
/// ```
/// use timeago_core::Options;
///
/// let options: Options = ["online", " ", "compact"].into_iter().collect();
/// assert!(options.is_online());
/// assert!(options.is_enabled("compact"));
/// assert_eq!(options.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    flags: BTreeSet<String>,
}

impl Options {
    /// Options with no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only [`ONLINE`] set.
    pub fn online() -> Self {
        Self::new().with(ONLINE)
    }

    /// Add a flag.
    pub fn with(mut self, flag: impl Into<String>) -> Self {
        self.insert(flag);
        self
    }

    /// Add a flag in place. Surrounding whitespace is trimmed and blank
    /// flags are skipped.
    pub fn insert(&mut self, flag: impl Into<String>) {
        let flag = flag.into();
        let flag = flag.trim();
        if !flag.is_empty() {
            self.flags.insert(flag.to_string());
        }
    }

    /// Check if `flag` was set.
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Check if [`ONLINE`] was set.
    pub fn is_online(&self) -> bool {
        self.is_enabled(ONLINE)
    }

    /// Flags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    /// Number of distinct flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check if no flags are set.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Options {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut options = Self::new();
        for flag in iter {
            options.insert(flag);
        }
        options
    }
}

impl<S: Into<String>> Extend<S> for Options {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online() {
        assert!(Options::online().is_online());
        assert!(!Options::new().is_online());
    }

    #[test]
    fn test_collect_ignores_blank_and_duplicates() {
        let options: Options = ["online", " ", "online", "random"].into_iter().collect();
        assert_eq!(options.len(), 2);
        assert!(options.is_enabled("random"));
        assert_eq!(options.iter().collect::<Vec<_>>(), vec!["online", "random"]);
    }
}
