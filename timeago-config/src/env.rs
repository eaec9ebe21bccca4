// Environment variable loading

use crate::{ConfigError, Result};
use std::env;

/// Reads prefixed environment variables (`TIMEAGO_LANGUAGE`, ...)
#[derive(Debug, Clone)]
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub const DEFAULT_PREFIX: &'static str = "TIMEAGO";

    /// Create a loader; `None` reads unprefixed names
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Full variable name for a key
    pub fn var_name(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        env::var(self.var_name(key)).map_err(ConfigError::EnvError)
    }

    /// Load a variable, treating unset and blank values as absent
    pub fn load_opt(&self, key: &str) -> Option<String> {
        self.lookup_opt(key, |name| env::var(name).ok())
    }

    /// Like [`EnvLoader::load_opt`], resolving the full name through `lookup`
    pub fn lookup_opt(
        &self,
        key: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        lookup(&self.var_name(key))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(Self::DEFAULT_PREFIX.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name() {
        assert_eq!(EnvLoader::default().var_name("language"), "TIMEAGO_LANGUAGE");
        assert_eq!(
            EnvLoader::new(Some("MY_APP".to_string())).var_name("timezone"),
            "MY_APP_TIMEZONE"
        );
        assert_eq!(EnvLoader::new(None).var_name("tz"), "TZ");
    }

    #[test]
    fn test_missing_var() {
        let loader = EnvLoader::new(Some("TIMEAGO_UNIT_TEST".to_string()));
        assert!(loader.load_var("MISSING_VAR_67890").is_err());
        assert_eq!(loader.load_opt("MISSING_VAR_67890"), None);
    }

    #[test]
    fn test_lookup_opt() {
        let loader = EnvLoader::default();
        let lookup = |name: &str| match name {
            "TIMEAGO_LANGUAGE" => Some(" ru ".to_string()),
            "TIMEAGO_TIMEZONE" => Some("   ".to_string()),
            _ => None,
        };

        assert_eq!(loader.lookup_opt("language", lookup), Some("ru".to_string()));
        assert_eq!(loader.lookup_opt("timezone", lookup), None);
        assert_eq!(loader.lookup_opt("other", lookup), None);
    }
}
