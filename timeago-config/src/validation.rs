// Settings validation

use crate::{ConfigError, Result};
use chrono_tz::Tz;
use timeago_i18n::validate_language;

/// Trait for validating settings
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Field validators
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate a language identifier with the rule table sources apply
    pub fn is_language(value: &str, field: &str) -> Result<()> {
        Self::not_empty(value, field)?;
        validate_language(value).map_err(|_| {
            ConfigError::ValidationError(format!(
                "{} must be a language code such as \"en\" or \"pt-BR\"",
                field
            ))
        })
    }

    /// Parse an IANA timezone name
    pub fn timezone(value: &str) -> Result<Tz> {
        value
            .trim()
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(ConfigValidator::not_empty("en", "language").is_ok());
        assert!(ConfigValidator::not_empty("  ", "language").is_err());
    }

    #[test]
    fn test_is_language() {
        assert!(ConfigValidator::is_language("uk", "language").is_ok());
        assert!(ConfigValidator::is_language("zh_Hans", "language").is_ok());
        assert!(ConfigValidator::is_language("en/../ru", "language").is_err());
        assert!(ConfigValidator::is_language("abcdefghijklmnop", "language").is_ok());
        assert!(ConfigValidator::is_language("abcdefghijklmnopq", "language").is_err());
    }

    #[test]
    fn test_timezone() {
        assert_eq!(
            ConfigValidator::timezone("Europe/Kiev").unwrap(),
            Tz::Europe__Kiev
        );
        assert_eq!(ConfigValidator::timezone(" UTC ").unwrap(), Tz::UTC);
        assert!(matches!(
            ConfigValidator::timezone("Mars/Olympus_Mons"),
            Err(ConfigError::InvalidTimezone(_))
        ));
    }
}
