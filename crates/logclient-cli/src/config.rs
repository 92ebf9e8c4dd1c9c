use anyhow::{Context, Result};
use logclient_core::logging::config::validate_level;
use logclient_core::{ConnectOptions, LogFormat};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client configuration, read from an optional TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub logging: LoggingSection,
}

/// `[connection]` table
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Timeout for establishing the connection (None = OS default)
    pub connect_timeout_secs: Option<u64>,
    /// Disable Nagle's algorithm (defaults to true)
    pub nodelay: Option<bool>,
}

/// `[logging]` table
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
    /// Relative paths are resolved against the config file's directory
    pub file: Option<String>,
    pub format: Option<LogFormat>,
}

impl Config {
    /// Loads configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_relative_paths(base);

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.connection.connect_timeout_secs == Some(0) {
            anyhow::bail!("connection.connect_timeout_secs must be greater than zero");
        }

        if let Some(ref level) = self.logging.level {
            validate_level(level).context("Invalid logging.level")?;
        }

        if let Some(ref file) = self.logging.file {
            if file.is_empty() {
                anyhow::bail!("logging.file cannot be empty");
            }
        }

        Ok(())
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(ref file) = self.logging.file {
            if !file.is_empty() && !Path::new(file).is_absolute() {
                self.logging.file = Some(base.join(file).to_string_lossy().to_string());
            }
        }
    }

    /// Socket options for the session connection
    pub fn connect_options(&self) -> ConnectOptions {
        let defaults = ConnectOptions::default();
        ConnectOptions {
            connect_timeout: self
                .connection
                .connect_timeout_secs
                .map(Duration::from_secs),
            nodelay: self.connection.nodelay.unwrap_or(defaults.nodelay),
        }
    }
}

impl LoggingSection {
    /// Returns this table with command-line flags layered on top
    pub fn overlay(
        &self,
        level: Option<String>,
        file: Option<PathBuf>,
        format: Option<LogFormat>,
    ) -> LoggingSection {
        LoggingSection {
            level: level.or_else(|| self.level.clone()),
            file: file
                .map(|path| path.to_string_lossy().to_string())
                .or_else(|| self.file.clone()),
            format: format.or(self.format),
        }
    }
}
