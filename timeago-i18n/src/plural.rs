//! Pluralization Rules
//!
//! Word tables do not name their language's grammar. Instead each unit lists
//! its word forms in order, and the number of forms selects the rule:
//!
//! | forms | rule | categories |
//! |---|---|---|
//! | 1 | [`NoPlurals`] | other |
//! | 2 | [`DefaultPlurals`] | one, other |
//! | 3 | [`SlavicPlurals`] | one, few, many |
//!
//! The form index is the position of the selected category in the rule's
//! category list, so a table's `"0"` entry is always the `one` form when the
//! rule has one.

use crate::{I18nError, Result};

/// Plural categories used by the word tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// One item (1, and 21, 31, ... in Slavic languages)
    One,
    /// Few items (Slavic languages)
    Few,
    /// Many items (Slavic languages)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plural rules for a family of languages.
pub trait PluralRules: Send + Sync {
    /// Get the plural category for a magnitude.
    fn category(&self, n: u64) -> PluralCategory;

    /// All categories, in table form-index order.
    fn categories(&self) -> &'static [PluralCategory];
}

/// Last decimal digit of a magnitude.
///
/// ```
/// use timeago_i18n::last_digit;
///
/// assert_eq!(last_digit(253), 3);
/// assert_eq!(last_digit(20), 0);
/// ```
#[inline]
pub fn last_digit(n: u64) -> u64 {
    n % 10
}

/// Form index for a magnitude under the given rules.
pub fn form_index(rules: &dyn PluralRules, n: u64) -> usize {
    let category = rules.category(n);
    rules
        .categories()
        .iter()
        .position(|c| *c == category)
        .unwrap_or(0)
}

static NO_PLURALS: NoPlurals = NoPlurals;
static DEFAULT_PLURALS: DefaultPlurals = DefaultPlurals;
static SLAVIC_PLURALS: SlavicPlurals = SlavicPlurals;

/// Select the rule for a unit declaring `forms` word forms.
pub fn rules_for_forms(forms: usize) -> Result<&'static dyn PluralRules> {
    match forms {
        1 => Ok(&NO_PLURALS),
        2 => Ok(&DEFAULT_PLURALS),
        3 => Ok(&SLAVIC_PLURALS),
        n => Err(I18nError::MalformedTable {
            language: String::new(),
            reason: format!("{} word forms, expected 1, 2 or 3", n),
        }),
    }
}

// ============================================================================
// Plural Rule Implementations
// ============================================================================

/// Invariant word (Chinese, Japanese, ...).
pub struct NoPlurals;

impl PluralRules for NoPlurals {
    fn category(&self, _n: u64) -> PluralCategory {
        PluralCategory::Other
    }

    fn categories(&self) -> &'static [PluralCategory] {
        &[PluralCategory::Other]
    }
}

/// Singular/plural (English-like): 1 = one, else other.
pub struct DefaultPlurals;

impl PluralRules for DefaultPlurals {
    fn category(&self, n: u64) -> PluralCategory {
        if n == 1 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    fn categories(&self) -> &'static [PluralCategory] {
        &[PluralCategory::One, PluralCategory::Other]
    }
}

/// One/few/many (Russian, Ukrainian, Belarusian).
///
/// - one: 1, 21, 31, ..., 101, ...
/// - few: 2-4, 22-24, 32-34, ...
/// - many: 0, 5-20, 25-30, and every number ending in 11-14
pub struct SlavicPlurals;

impl PluralRules for SlavicPlurals {
    fn category(&self, n: u64) -> PluralCategory {
        if (11..=14).contains(&(n % 100)) {
            return PluralCategory::Many;
        }

        match last_digit(n) {
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }

    fn categories(&self) -> &'static [PluralCategory] {
        &[PluralCategory::One, PluralCategory::Few, PluralCategory::Many]
    }
}
