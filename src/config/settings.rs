//! Typed application settings.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Root settings structure. Only `database.url` has no usable default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Pool checkout timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggerSettings {
    /// Env-filter directive, e.g. "info" or "bookstore_manager=debug,info"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Console format: "full", "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub colored: bool,
}

fn default_app_name() -> String {
    "bookstore-manager".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Sanity checks that cannot be expressed through serde defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "must not be empty",
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "must be greater than zero",
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "must not exceed database.max_connections",
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::validation("server.port", "must not be zero"));
        }

        match self.logger.format.to_lowercase().as_str() {
            "full" | "compact" | "json" => {}
            other => {
                return Err(ConfigError::validation(
                    "logger.format",
                    format!("unknown format '{other}', expected full, compact or json"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn minimal_settings(url: &str) -> Settings {
        Settings {
            application: ApplicationConfig::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: url.to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                connection_timeout: default_connection_timeout(),
                auto_migrate: false,
            },
            logger: LoggerSettings::default(),
        }
    }

    #[test]
    fn test_minimal_toml_applies_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [database]
            url = "postgres://localhost/bookstore"
            "#,
        )
        .unwrap();

        assert_eq!(settings.application.name, "bookstore-manager");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.request_timeout, 30);
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.database.min_connections, 1);
        assert!(!settings.database.auto_migrate);
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.logger.format, "full");
        assert!(settings.logger.colored);
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        let result: Result<Settings, _> = toml::from_str("[server]\nport = 3000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let settings = minimal_settings("postgres://localhost/bookstore");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let settings = minimal_settings("  ");
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let mut settings = minimal_settings("postgres://localhost/bookstore");
        settings.database.min_connections = 50;
        settings.database.max_connections = 5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut settings = minimal_settings("postgres://localhost/bookstore");
        settings.logger.format = "pretty".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
            ..ServerConfig::default()
        };
        assert_eq!(server.address(), "0.0.0.0:9090");
    }

    proptest! {
        #[test]
        fn prop_settings_toml_roundtrip(
            port in 1u16..=u16::MAX,
            max_connections in 1u32..100,
            connection_timeout in 1u64..3600,
            auto_migrate in any::<bool>(),
            colored in any::<bool>(),
        ) {
            let mut settings = minimal_settings("postgres://localhost/bookstore");
            settings.server.port = port;
            settings.database.max_connections = max_connections;
            settings.database.min_connections = 1;
            settings.database.connection_timeout = connection_timeout;
            settings.database.auto_migrate = auto_migrate;
            settings.logger.colored = colored;

            let serialized = toml::to_string(&settings).unwrap();
            let reparsed: Settings = toml::from_str(&serialized).unwrap();
            prop_assert_eq!(settings, reparsed);
        }
    }
}
