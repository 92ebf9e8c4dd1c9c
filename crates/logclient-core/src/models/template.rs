use std::fmt;

/// Replaced with the rendered timestamp
pub const TIMESTAMP_TOKEN: &str = "{timestamp}";
/// Replaced with the level name
pub const LEVEL_TOKEN: &str = "{level}";
/// Replaced with the message body
pub const MESSAGE_TOKEN: &str = "{message}";

/// Pattern used to render a log entry into a line of text
///
/// Placeholder tokens may appear in any order and any number of times.
/// Text outside the tokens is copied as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate(String);

impl FormatTemplate {
    /// Built-in templates, selectable by 1-based number
    pub const PRESETS: [&'static str; 3] = [
        "[{timestamp}] [{level}]: {message}",
        "[{level}] {timestamp}: {message}",
        "{message}: [{level}] {timestamp}",
    ];

    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns the preset with the given 1-based number
    pub fn preset(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::PRESETS.get(idx))
            .map(|pattern| Self::new(*pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::new(Self::PRESETS[0])
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_preset() {
        assert_eq!(
            FormatTemplate::default().as_str(),
            "[{timestamp}] [{level}]: {message}"
        );
    }

    #[test]
    fn presets_are_one_based() {
        assert_eq!(FormatTemplate::preset(0), None);
        assert_eq!(
            FormatTemplate::preset(2).map(|t| t.to_string()),
            Some("[{level}] {timestamp}: {message}".to_string())
        );
        assert_eq!(FormatTemplate::preset(4), None);
    }
}
