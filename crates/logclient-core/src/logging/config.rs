use crate::logging::formatter::LogFormat;
use anyhow::Result;
use std::path::PathBuf;

/// Environment variable naming a diagnostics log file
pub const LOG_FILE_ENV: &str = "LOGSERVICE_LOG_FILE";

/// Level used when nothing else sets one.
/// Kept quiet so diagnostics stay out of the way of the interactive menu.
pub const DEFAULT_LEVEL: &str = "warn";

/// Levels accepted by `level`
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Rejects anything that is not one of [`LEVELS`]
pub fn validate_level(level: &str) -> Result<()> {
    if !LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
        anyhow::bail!(
            "Invalid log level: {}. Supported levels: {}",
            level,
            LEVELS.join(", ")
        );
    }
    Ok(())
}

/// Configuration for the diagnostics subsystem
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Path to log file (None = no file logging)
    pub file: Option<PathBuf>,
    /// Emit events on stderr
    pub console: bool,
    /// Log format (text or json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file: std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from),
            console: true,
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Builds a configuration from command-line style inputs
    ///
    /// `verbose` forces `debug`. Unset values fall back to [`Default`].
    pub fn from_args(
        level: Option<String>,
        file: Option<PathBuf>,
        format: Option<LogFormat>,
        verbose: bool,
    ) -> Result<Self> {
        let defaults = Self::default();

        let level = if verbose {
            "debug".to_string()
        } else {
            level.unwrap_or(defaults.level)
        };
        validate_level(&level)?;

        Ok(Self {
            level,
            file: file.or(defaults.file),
            console: defaults.console,
            format: format.unwrap_or(defaults.format),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_level() {
        let config =
            LoggingConfig::from_args(Some("error".into()), None, None, true).unwrap();
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn unset_values_use_defaults() {
        let config = LoggingConfig::from_args(None, None, Some(LogFormat::Json), false).unwrap();
        assert_eq!(config.level, DEFAULT_LEVEL);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.console);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = LoggingConfig::from_args(Some("loud".into()), None, None, false)
            .expect_err("loud is not a level");
        assert!(err.to_string().contains("Invalid log level: loud"), "{err}");

        assert!(validate_level("INFO").is_ok());
        assert!(validate_level("logclient_core=debug").is_err());
    }
}
