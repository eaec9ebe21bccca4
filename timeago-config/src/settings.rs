// Formatting settings

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, Result, Validate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use timeago_log::debug;

/// Settings as written in a file or the environment, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Validate for SettingsFile {
    fn validate(&self) -> Result<()> {
        if let Some(ref language) = self.language {
            ConfigValidator::is_language(language, "language")?;
        }
        if let Some(ref timezone) = self.timezone {
            ConfigValidator::timezone(timezone)?;
        }
        Ok(())
    }
}

impl SettingsFile {
    /// Validate and fill unset fields with defaults
    pub fn into_settings(self) -> Result<Settings> {
        self.validate()?;

        let mut settings = Settings::default();
        if let Some(language) = self.language {
            settings.language = language.trim().to_string();
        }
        if let Some(timezone) = self.timezone {
            settings.timezone = ConfigValidator::timezone(&timezone)?;
        }
        Ok(settings)
    }
}

/// Language and timezone a phrase is produced for.
///
/// Immutable once built; pass it to each formatting call instead of
/// relying on process-wide state.
///
/// ```
/// use timeago_config::Settings;
///
/// let settings = Settings::parse("ru", "Europe/Kiev").unwrap();
/// assert_eq!(settings.language(), "ru");
/// assert_eq!(settings.timezone().name(), "Europe/Kiev");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    language: String,
    timezone: Tz,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Self::DEFAULT_LANGUAGE.to_string(),
            timezone: Tz::UTC,
        }
    }
}

impl Settings {
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    /// Settings for a language in a timezone
    pub fn new(language: impl Into<String>, timezone: Tz) -> Self {
        Self {
            language: language.into(),
            timezone,
        }
    }

    /// Validate a language code and an IANA timezone name
    pub fn parse(language: &str, timezone: &str) -> Result<Self> {
        SettingsFile {
            language: Some(language.to_string()),
            timezone: Some(timezone.to_string()),
        }
        .into_settings()
    }

    /// Replace the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replace the timezone
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Read `TIMEAGO_LANGUAGE` and `TIMEAGO_TIMEZONE`
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(EnvLoader::DEFAULT_PREFIX)
    }

    /// Read `<prefix>_LANGUAGE` and `<prefix>_TIMEZONE`
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |name| env::var(name).ok())
    }

    /// Read `<prefix>_LANGUAGE` and `<prefix>_TIMEZONE` through `lookup`
    /// instead of the process environment.
    ///
    /// ```
    /// use timeago_config::Settings;
    ///
    /// let settings = Settings::from_lookup("APP", |name| match name {
    ///     "APP_LANGUAGE" => Some("uk".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(settings.language(), "uk");
    /// ```
    pub fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::from_env_loader(&EnvLoader::new(Some(prefix.to_string())), lookup)
    }

    fn from_env_loader(
        loader: &EnvLoader,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = SettingsFile {
            language: loader.lookup_opt("language", &lookup),
            timezone: loader.lookup_opt("timezone", &lookup),
        };
        debug!(
            "settings from {}*: {:?}",
            loader.var_name(""),
            file
        );
        file.into_settings()
    }

    /// Read `TIMEAGO_*` from the environment, falling back to a `.env` file.
    ///
    /// Without a path, a `.env` in the working directory is used if present.
    /// Variables already set in the environment win over the file. The file
    /// is read directly; the process environment is never modified.
    pub fn from_dotenv(path: Option<&Path>) -> Result<Self> {
        Self::from_dotenv_with_prefix(path, EnvLoader::DEFAULT_PREFIX)
    }

    /// [`Settings::from_dotenv`] for `<prefix>_LANGUAGE` and `<prefix>_TIMEZONE`
    pub fn from_dotenv_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let vars = match path {
            Some(path) => read_dotenv(dotenvy::from_path_iter(path))?,
            None => read_dotenv(dotenvy::dotenv_iter()).unwrap_or_default(),
        };

        Self::from_lookup(prefix, |name| {
            env::var(name).ok().or_else(|| vars.get(name).cloned())
        })
    }

    /// Load a `.json` or `.toml` settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = ConfigLoader::auto(path)?.load_file(path)?;
        debug!("settings from {}: {:?}", path.display(), file);
        file.into_settings()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

fn read_dotenv<R: std::io::Read>(
    iter: dotenvy::Result<dotenvy::Iter<R>>,
) -> Result<HashMap<String, String>> {
    iter.and_then(|entries| entries.collect::<dotenvy::Result<HashMap<_, _>>>())
        .map_err(|e| ConfigError::LoadError(e.to_string()))
}
