// Error types for settings management

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Failed to load settings: {0}")]
    LoadError(String),

    #[error("Failed to parse settings: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
