use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{RelayConfig, RelayKind};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            title: default_title(),
            tagline: default_tagline(),
        }
    }
}

fn default_owner() -> String {
    "Your Name".to_string()
}

fn default_title() -> String {
    "Data Analyst Portfolio".to_string()
}

fn default_tagline() -> String {
    "Data visualization expert portfolio".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `RELAY_ACCESS_KEY`
    /// 2. Environment variables (FOLIO__RELAY__KIND, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(access_key) = env::var("RELAY_ACCESS_KEY") {
            builder = builder.set_override("relay.access_key", access_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.relay.recipient.trim().is_empty() {
            return Err("Relay recipient must not be empty".to_string());
        }
        if self.relay.kind == RelayKind::JsonApi && self.relay.access_key().is_none() {
            return Err(
                "Relay `json-api` requires an access key (set RELAY_ACCESS_KEY)".to_string(),
            );
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format `{}`, expected `pretty` or `json`",
                self.logging.format
            ));
        }
        Ok(())
    }
}
