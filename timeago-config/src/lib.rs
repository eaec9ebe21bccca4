// Settings management for timeago
//
// Language and timezone travel with each formatting call as an immutable
// `Settings` value. They can be built in code, read from `TIMEAGO_*`
// environment variables (optionally seeded from a `.env` file), or loaded
// from a JSON or TOML file.

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{Settings, SettingsFile};
pub use validation::{ConfigValidator, Validate};

pub use chrono_tz::Tz;
