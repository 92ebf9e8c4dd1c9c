use crate::formatter::format_entry;
use crate::models::{FormatTemplate, LogLevel};
use chrono::NaiveDateTime;

/// A single entry about to be sent; never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Renders the entry with the given template and instant
    pub fn render(&self, template: &FormatTemplate, now: NaiveDateTime) -> String {
        format_entry(template, self.level, &self.message, now)
    }
}
