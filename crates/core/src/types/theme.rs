//! Color theme preference.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown theme name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeError(pub String);

/// The visitor's color theme preference.
///
/// `System` follows the browser's `prefers-color-scheme` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// All themes, in switcher order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// The theme name used in forms and sessions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// The class applied to the `<html>` element.
    ///
    /// `System` has no static class; it is resolved in the browser.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "",
        }
    }

    /// Whether the browser has to resolve the theme from its media query.
    #[must_use]
    pub const fn follows_system(self) -> bool {
        matches!(self, Self::System)
    }

    /// Parse a theme name.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` for anything other than `light`, `dark` or `system`.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ThemeError(s.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::parse("Light").unwrap(), Theme::Light);
        assert_eq!(Theme::parse("system").unwrap(), Theme::System);
        assert!(Theme::parse("sepia").is_err());
    }

    #[test]
    fn test_default_follows_system() {
        assert_eq!(Theme::default(), Theme::System);
        assert!(Theme::default().follows_system());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Theme::Light.css_class(), "light");
        assert_eq!(Theme::Dark.css_class(), "dark");
        assert_eq!(Theme::System.css_class(), "");
    }
}
