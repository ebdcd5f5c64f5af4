use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Human-readable text with a locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    locale: String,
    text: String,
}

impl LocalizedText {
    /// Distinguished null value: empty locale and empty text.
    pub const NULL: LocalizedText = LocalizedText {
        locale: String::new(),
        text: String::new(),
    };

    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }

    /// English-locale text, the form used throughout the standard model.
    pub fn english(text: impl Into<String>) -> Self {
        Self::new("en", text)
    }

    #[inline]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_null(&self) -> bool {
        self.locale.is_empty() && self.text.is_empty()
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::NULL
    }
}

impl Display for LocalizedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_constructor_sets_locale() {
        let text = LocalizedText::english("GetMonitoredItems");
        assert_eq!(text.locale(), "en");
        assert_eq!(text.text(), "GetMonitoredItems");
        assert!(!text.is_null());
    }

    #[test]
    fn null_is_empty_locale_and_text() {
        assert!(LocalizedText::NULL.is_null());
        assert!(LocalizedText::default().is_null());
        assert!(!LocalizedText::new("", "x").is_null());
    }
}
