//! Language Tables
//!
//! A [`LanguageTable`] holds the word forms for every [`Unit`] plus the
//! "ago" suffix and the "online" phrase of one language.

use crate::plural::{form_index, rules_for_forms};
use crate::{I18nError, Result, Unit};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Table file layout. Keys other than these are ignored.
#[derive(Debug, Deserialize)]
struct RawTable {
    ago: String,
    online: String,
    seconds: BTreeMap<String, String>,
    minutes: BTreeMap<String, String>,
    hours: BTreeMap<String, String>,
    days: BTreeMap<String, String>,
    weeks: BTreeMap<String, String>,
    months: BTreeMap<String, String>,
    years: BTreeMap<String, String>,
}

impl RawTable {
    fn forms(&self, unit: Unit) -> &BTreeMap<String, String> {
        match unit {
            Unit::Seconds => &self.seconds,
            Unit::Minutes => &self.minutes,
            Unit::Hours => &self.hours,
            Unit::Days => &self.days,
            Unit::Weeks => &self.weeks,
            Unit::Months => &self.months,
            Unit::Years => &self.years,
        }
    }
}

/// Immutable word data for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    language: String,
    ago: String,
    online: String,
    /// Word forms indexed by unit, then by form index
    forms: [Vec<String>; 7],
}

impl LanguageTable {
    /// Parse a table from its JSON representation.
    ///
    /// Every unit must declare 1, 2 or 3 forms keyed `"0"`, `"1"`, `"2"`
    /// without gaps.
    pub fn from_json(language: &str, json: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(json).map_err(|e| I18nError::MalformedTable {
            language: language.to_string(),
            reason: e.to_string(),
        })?;

        let mut forms: [Vec<String>; 7] = Default::default();
        for unit in Unit::ALL {
            forms[unit.index()] = collect_forms(language, unit, raw.forms(unit))?;
        }

        Ok(Self {
            language: language.to_string(),
            ago: raw.ago,
            online: raw.online,
            forms,
        })
    }

    /// Language identifier this table was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The suffix placed after the unit word.
    pub fn ago(&self) -> &str {
        &self.ago
    }

    /// Phrase used instead of a number when the "online" option applies.
    pub fn online(&self) -> &str {
        &self.online
    }

    /// Number of word forms declared for a unit.
    pub fn form_count(&self, unit: Unit) -> usize {
        self.forms[unit.index()].len()
    }

    /// Word for `unit` agreeing with `magnitude`.
    pub fn word(&self, unit: Unit, magnitude: u64) -> Result<&str> {
        let forms = &self.forms[unit.index()];
        let rules = rules_for_forms(forms.len()).map_err(|e| self.attach_language(e))?;
        let index = form_index(rules, magnitude);

        forms
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| I18nError::MissingForm {
                language: self.language.clone(),
                unit: unit.key(),
                index,
            })
    }

    /// Full phrase, e.g. `"5 minutes ago"`.
    ///
    /// Empty parts are skipped so the result never has doubled, leading or
    /// trailing spaces.
    pub fn phrase(&self, unit: Unit, magnitude: u64) -> Result<String> {
        let number = magnitude.to_string();
        let word = self.word(unit, magnitude)?;

        let phrase = [number.as_str(), word.trim(), self.ago.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(phrase)
    }

    fn attach_language(&self, err: I18nError) -> I18nError {
        match err {
            I18nError::MalformedTable { reason, .. } => I18nError::MalformedTable {
                language: self.language.clone(),
                reason,
            },
            other => other,
        }
    }
}

fn collect_forms(
    language: &str,
    unit: Unit,
    entries: &BTreeMap<String, String>,
) -> Result<Vec<String>> {
    let malformed = |reason: String| I18nError::MalformedTable {
        language: language.to_string(),
        reason,
    };

    let mut indexed = Vec::with_capacity(entries.len());
    for (key, word) in entries {
        let index: usize = key
            .trim()
            .parse()
            .map_err(|_| malformed(format!("{}: form key {:?} is not an index", unit, key)))?;
        indexed.push((index, word.clone()));
    }
    indexed.sort_by_key(|(index, _)| *index);

    for (expected, (index, _)) in indexed.iter().enumerate() {
        if *index != expected {
            return Err(malformed(format!(
                "{}: form indices must be 0..{} without gaps",
                unit,
                indexed.len()
            )));
        }
    }

    rules_for_forms(indexed.len()).map_err(|_| {
        malformed(format!(
            "{}: {} word forms, expected 1, 2 or 3",
            unit,
            indexed.len()
        ))
    })?;

    Ok(indexed.into_iter().map(|(_, word)| word).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = include_str!("../locales/en.json");
    const RU: &str = include_str!("../locales/ru.json");

    fn table_with(seconds: &str) -> String {
        format!(
            r#"{{
                "ago": "ago", "online": "Online",
                "seconds": {seconds},
                "minutes": {{"0": "minute", "1": "minutes"}},
                "hours": {{"0": "hour", "1": "hours"}},
                "days": {{"0": "day", "1": "days"}},
                "weeks": {{"0": "week", "1": "weeks"}},
                "months": {{"0": "month", "1": "months"}},
                "years": {{"0": "year", "1": "years"}}
            }}"#
        )
    }

    #[test]
    fn test_english_phrases() {
        let en = LanguageTable::from_json("en", EN).unwrap();

        assert_eq!(en.phrase(Unit::Days, 11).unwrap(), "11 days ago");
        assert_eq!(en.phrase(Unit::Days, 21).unwrap(), "21 days ago");
        assert_eq!(en.phrase(Unit::Seconds, 30).unwrap(), "30 seconds ago");
        assert_eq!(en.phrase(Unit::Seconds, 31).unwrap(), "31 seconds ago");
        assert_eq!(en.phrase(Unit::Hours, 10).unwrap(), "10 hours ago");
        assert_eq!(en.phrase(Unit::Years, 2).unwrap(), "2 years ago");
        assert_eq!(en.phrase(Unit::Minutes, 1).unwrap(), "1 minute ago");
    }

    #[test]
    fn test_russian_phrases() {
        let ru = LanguageTable::from_json("ru", RU).unwrap();

        assert_eq!(ru.phrase(Unit::Hours, 5).unwrap(), "5 часов назад");
        assert_eq!(ru.phrase(Unit::Days, 11).unwrap(), "11 дней назад");
        assert_eq!(ru.phrase(Unit::Years, 21).unwrap(), "21 год назад");
        assert_eq!(ru.phrase(Unit::Minutes, 59).unwrap(), "59 минут назад");
        assert_eq!(ru.phrase(Unit::Hours, 3).unwrap(), "3 часа назад");
    }

    #[test]
    fn test_form_counts() {
        let en = LanguageTable::from_json("en", EN).unwrap();
        let ru = LanguageTable::from_json("ru", RU).unwrap();
        assert_eq!(en.form_count(Unit::Weeks), 2);
        assert_eq!(ru.form_count(Unit::Weeks), 3);
        assert_eq!(ru.online(), "В сети");
        assert_eq!(ru.language(), "ru");
    }

    #[test]
    fn test_empty_suffix_has_no_trailing_space() {
        let json = EN.replace(r#""ago": "ago""#, r#""ago": """#);
        let table = LanguageTable::from_json("xx", &json).unwrap();
        assert_eq!(table.phrase(Unit::Hours, 2).unwrap(), "2 hours");
    }

    #[test]
    fn test_empty_unit_word_is_skipped() {
        let table = LanguageTable::from_json("xx", &table_with(r#"{"0": "", "1": " "}"#)).unwrap();
        assert_eq!(table.phrase(Unit::Seconds, 1).unwrap(), "1 ago");
        assert_eq!(table.phrase(Unit::Seconds, 5).unwrap(), "5 ago");
    }

    #[test]
    fn test_extra_top_level_keys_are_ignored() {
        let json = EN.replacen('{', r#"{"name": "English", "version": 2,"#, 1);
        let table = LanguageTable::from_json("en", &json).unwrap();
        assert_eq!(table, LanguageTable::from_json("en", EN).unwrap());
        assert_eq!(table.phrase(Unit::Minutes, 5).unwrap(), "5 minutes ago");
    }

    #[test]
    fn test_single_form_unit() {
        let table = LanguageTable::from_json("xx", &table_with(r#"{"0": "s"}"#)).unwrap();
        assert_eq!(table.phrase(Unit::Seconds, 1).unwrap(), "1 s ago");
        assert_eq!(table.phrase(Unit::Seconds, 7).unwrap(), "7 s ago");
    }

    #[test]
    fn test_rejects_gaps_in_form_indices() {
        let err = LanguageTable::from_json("xx", &table_with(r#"{"0": "a", "2": "b"}"#)).unwrap_err();
        assert!(matches!(err, I18nError::MalformedTable { .. }));
    }

    #[test]
    fn test_rejects_non_numeric_form_keys() {
        let err = LanguageTable::from_json("xx", &table_with(r#"{"one": "a"}"#)).unwrap_err();
        assert!(matches!(err, I18nError::MalformedTable { .. }));
    }

    #[test]
    fn test_rejects_too_many_forms() {
        let forms = r#"{"0": "a", "1": "b", "2": "c", "3": "d"}"#;
        let err = LanguageTable::from_json("xx", &table_with(forms)).unwrap_err();
        assert!(matches!(err, I18nError::MalformedTable { .. }));
    }

    #[test]
    fn test_rejects_missing_unit() {
        let err = LanguageTable::from_json("xx", r#"{"ago": "ago", "online": "Online"}"#)
            .unwrap_err();
        match err {
            I18nError::MalformedTable { language, .. } => assert_eq!(language, "xx"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(LanguageTable::from_json("xx", "[1, 2, 3]").is_err());
        assert!(LanguageTable::from_json("xx", "not json").is_err());
    }
}
