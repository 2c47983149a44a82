use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Mail relay settings. Host, username and password are all needed for SMTP
/// delivery; without them notifications are only written to the log.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: None,
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

/// Resolved SMTP credentials, only available when every required setting is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl EmailConfig {
    /// Sender address, falling back to the default when configured empty.
    pub fn from_address(&self) -> &str {
        if self.from_email.is_empty() {
            DEFAULT_FROM_EMAIL
        } else {
            &self.from_email
        }
    }

    pub fn smtp(&self) -> Option<SmtpSettings> {
        let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        Some(SmtpSettings {
            host: present(&self.smtp_host)?,
            port: self.smtp_port,
            username: present(&self.smtp_username)?,
            password: present(&self.smtp_password)?,
        })
    }
}

fn default_smtp_port() -> u16 {
    587
}

const DEFAULT_FROM_EMAIL: &str = "no-reply@clerint.org";

fn default_from_email() -> String {
    DEFAULT_FROM_EMAIL.to_string()
}

fn default_from_name() -> String {
    "CLERINT".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of the human readable format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Unprefixed mail variables (SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS, FROM_EMAIL)
    /// 2. Environment variables (CLERINT__EMAIL__SMTP_HOST, etc.)
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
            Environment::with_prefix("CLERINT")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("SMTP_HOST", "email.smtp_host"),
            ("SMTP_PORT", "email.smtp_port"),
            ("SMTP_USER", "email.smtp_username"),
            ("SMTP_PASS", "email.smtp_password"),
            ("FROM_EMAIL", "email.from_email"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        Ok(())
    }
}
