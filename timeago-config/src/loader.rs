// Settings file loaders

use crate::{ConfigError, Result, SettingsFile};
use std::fs;
use std::path::Path;

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Settings file loader
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    /// Load settings from file
    pub fn load_file(&self, path: &Path) -> Result<SettingsFile> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.parse(&content)
    }

    /// Parse settings from string
    pub fn parse(&self, content: &str) -> Result<SettingsFile> {
        match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e))),
            FileFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        let file = loader
            .parse(r#"{"language": "ru", "timezone": "Europe/Kiev"}"#)
            .unwrap();

        assert_eq!(file.language.as_deref(), Some("ru"));
        assert_eq!(file.timezone.as_deref(), Some("Europe/Kiev"));
    }

    #[test]
    fn test_parse_toml_partial() {
        let loader = ConfigLoader::new(FileFormat::Toml);
        let file = loader.parse("language = \"uk\"\n").unwrap();

        assert_eq!(file.language.as_deref(), Some("uk"));
        assert_eq!(file.timezone, None);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let loader = ConfigLoader::new(FileFormat::Json);
        assert!(matches!(
            loader.parse(r#"{"lang": "ru"}"#),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("TOML"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("yaml"), None);

        assert!(ConfigLoader::auto(Path::new("timeago.toml")).is_ok());
        assert!(ConfigLoader::auto(Path::new("timeago")).is_err());
    }
}
