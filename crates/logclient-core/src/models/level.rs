use crate::error::ClientError;
use std::fmt;
use std::str::FromStr;

/// Severity attached to an entry sent to the logging service
///
/// Declaration order defines the ordinal shown in the level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Error,
    Warning,
    Debug,
    Custom,
    Fatal,
}

impl LogLevel {
    /// All levels in ordinal order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Info,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Debug,
        LogLevel::Custom,
        LogLevel::Fatal,
    ];

    /// Canonical name, as written on the wire
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Error => "Error",
            LogLevel::Warning => "Warning",
            LogLevel::Debug => "Debug",
            LogLevel::Custom => "Custom",
            LogLevel::Fatal => "Fatal",
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = ClientError;

    /// Accepts the exact level name or its ordinal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        let parsed = match token.parse::<usize>() {
            Ok(ordinal) => Self::from_ordinal(ordinal),
            Err(_) => Self::ALL
                .iter()
                .copied()
                .find(|level| level.name() == token),
        };

        parsed.ok_or_else(|| ClientError::InvalidLevel(s.to_string()))
    }
}
