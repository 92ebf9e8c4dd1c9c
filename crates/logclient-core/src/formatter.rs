use crate::models::{FormatTemplate, LogLevel, LEVEL_TOKEN, MESSAGE_TOKEN, TIMESTAMP_TOKEN};
use chrono::{Local, NaiveDateTime};

/// 12-hour clock with zero-padded fields and an uppercase AM/PM suffix
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Source of the instant stamped on each entry
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Renders one entry into a single line of text
///
/// Tokens are replaced in a fixed order: level, then timestamp, then message.
/// The message goes last so placeholder text inside it is never expanded.
pub fn format_entry(
    template: &FormatTemplate,
    level: LogLevel,
    message: &str,
    now: NaiveDateTime,
) -> String {
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

    template
        .as_str()
        .replace(LEVEL_TOKEN, level.name())
        .replace(TIMESTAMP_TOKEN, &timestamp)
        .replace(MESSAGE_TOKEN, message)
}
