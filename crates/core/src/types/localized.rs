//! Text published in every site language.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::language::Language;

/// A piece of text with an English and an Italian variant.
///
/// Static site copy is declared with [`Localized::new`] in `static` items so
/// that [`Localized::get`] hands out `&'static str`. Values read back from a
/// session own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Localized {
    pub en: Cow<'static, str>,
    pub it: Cow<'static, str>,
}

impl Localized {
    /// Declare static text in both languages.
    #[must_use]
    pub const fn new(en: &'static str, it: &'static str) -> Self {
        Self {
            en: Cow::Borrowed(en),
            it: Cow::Borrowed(it),
        }
    }

    /// Text that reads the same in every language (names, codes, numbers).
    #[must_use]
    pub const fn plain(text: &'static str) -> Self {
        Self::new(text, text)
    }

    /// Build from owned strings.
    #[must_use]
    pub fn owned(en: impl Into<String>, it: impl Into<String>) -> Self {
        Self {
            en: Cow::Owned(en.into()),
            it: Cow::Owned(it.into()),
        }
    }

    /// The variant for `language`, falling back to English when it is empty.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        let english: &str = &self.en;
        let text: &str = match language {
            Language::En => english,
            Language::It => &self.it,
        };
        if text.is_empty() { english } else { text }
    }

    /// Whether both variants are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.it.trim().is_empty()
    }
}
