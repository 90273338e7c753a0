//! Site copy commands.

use max_publishing_storefront::i18n;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{} texts are missing a translation: {}", .0.len(), .0.join(", "))]
pub struct IncompleteTexts(pub Vec<&'static str>);

/// Check that every localized text has both languages.
///
/// # Errors
///
/// Returns `IncompleteTexts` listing the keys that are missing a language.
pub fn check() -> Result<(), IncompleteTexts> {
    let missing = i18n::incomplete_texts();
    if !missing.is_empty() {
        return Err(IncompleteTexts(missing));
    }

    tracing::info!(
        checked = i18n::all_texts().len(),
        "All texts are translated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_copy_is_complete() {
        assert!(check().is_ok());
    }

    #[test]
    fn test_error_lists_keys() {
        let err = IncompleteTexts(vec!["nav.HOME", "cart.TITLE"]);
        assert_eq!(
            err.to_string(),
            "2 texts are missing a translation: nav.HOME, cart.TITLE"
        );
    }
}
