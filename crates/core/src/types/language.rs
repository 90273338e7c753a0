//! Site language.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unsupported language code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct LanguageError(pub String);

/// A language the site is published in.
///
/// English is the default and the fallback for missing translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    It,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Self; 2] = [Self::En, Self::It];

    /// The ISO 639-1 code (`en`, `it`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }

    /// The language's own name, as shown in the switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::It => "Italiano",
        }
    }

    /// Parse a language code, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `LanguageError` for anything other than `en` or `it`.
    pub fn parse(s: &str) -> Result<Self, LanguageError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "it" => Ok(Self::It),
            _ => Err(LanguageError(s.to_owned())),
        }
    }

    /// Pick the preferred supported language from an `Accept-Language` header.
    ///
    /// Entries are ranked by their `q` value (default 1.0); only the primary
    /// subtag is considered, so `it-IT` selects Italian.
    #[must_use]
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let tag = parts.next().unwrap_or_default().trim();
            let primary = tag.split('-').next().unwrap_or_default();
            let Ok(language) = Self::parse(primary) else {
                continue;
            };

            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if quality <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, q)| quality > q) {
                best = Some((language, quality));
            }
        }

        best.map(|(language, _)| language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Language::parse("en").unwrap(), Language::En);
        assert_eq!(Language::parse("IT").unwrap(), Language::It);
        assert_eq!(Language::parse(" it ").unwrap(), Language::It);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Language::parse("fr").is_err());
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_accept_language_primary_tag() {
        assert_eq!(
            Language::from_accept_language("it-IT,it;q=0.9"),
            Some(Language::It)
        );
    }

    #[test]
    fn test_accept_language_respects_quality() {
        assert_eq!(
            Language::from_accept_language("fr-FR, it;q=0.5, en;q=0.8"),
            Some(Language::En)
        );
    }

    #[test]
    fn test_accept_language_unsupported() {
        assert_eq!(Language::from_accept_language("de-DE,fr;q=0.7"), None);
        assert_eq!(Language::from_accept_language(""), None);
    }

    #[test]
    fn test_accept_language_zero_quality_ignored() {
        assert_eq!(
            Language::from_accept_language("it;q=0, en;q=0.1"),
            Some(Language::En)
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::It).unwrap(), "\"it\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
