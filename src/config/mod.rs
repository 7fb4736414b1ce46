//! Layered configuration.
//!
//! Sources, in order of priority: `default.toml`, `{environment}.toml`,
//! `local.toml`, then `BOOKSTORE_*` environment variables.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, DatabaseConfig, LoggerSettings, ServerConfig, Settings,
};
