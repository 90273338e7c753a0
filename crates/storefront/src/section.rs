//! Top-level site sections.
//!
//! Each section is a route. The header uses [`Section::from_path`] to mark
//! the active navigation item.

use max_publishing_core::Localized;

use crate::i18n::{footer, nav};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Books,
    Categories,
    Contact,
    Cart,
    Profile,
    Privacy,
    Terms,
}

impl Section {
    /// Sections listed in the main navigation, in order.
    pub const NAV: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Books,
        Self::Categories,
        Self::Contact,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Books => "/books",
            Self::Categories => "/categories",
            Self::Contact => "/contact",
            Self::Cart => "/cart",
            Self::Profile => "/profile",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
        }
    }

    /// Section owning a request path. Book detail pages belong to `Books`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/" => Some(Self::Home),
            "/about" => Some(Self::About),
            "/services" => Some(Self::Services),
            "/books" => Some(Self::Books),
            "/categories" => Some(Self::Categories),
            "/contact" => Some(Self::Contact),
            "/cart" => Some(Self::Cart),
            "/profile" => Some(Self::Profile),
            "/privacy" => Some(Self::Privacy),
            "/terms" => Some(Self::Terms),
            _ if path.starts_with("/books/") => Some(Self::Books),
            _ => None,
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static Localized {
        match self {
            Self::Home => &nav::HOME,
            Self::About => &nav::ABOUT,
            Self::Services => &nav::SERVICES,
            Self::Books => &nav::BOOKS,
            Self::Categories => &nav::CATEGORIES,
            Self::Contact => &nav::CONTACT,
            Self::Cart => &nav::CART,
            Self::Profile => &nav::PROFILE,
            Self::Privacy => &footer::PRIVACY,
            Self::Terms => &footer::TERMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use max_publishing_core::Language;

    use super::*;

    #[test]
    fn test_path_roundtrip() {
        for section in [
            Section::Home,
            Section::About,
            Section::Services,
            Section::Books,
            Section::Categories,
            Section::Contact,
            Section::Cart,
            Section::Profile,
            Section::Privacy,
            Section::Terms,
        ] {
            assert_eq!(Section::from_path(section.path()), Some(section));
        }
    }

    #[test]
    fn test_from_path_variants() {
        assert_eq!(Section::from_path("/books/the-prince"), Some(Section::Books));
        assert_eq!(Section::from_path("/books?sort=price"), Some(Section::Books));
        assert_eq!(Section::from_path("/about/"), Some(Section::About));
        assert_eq!(Section::from_path("/nowhere"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::Books.label().get(Language::It), "Libri");
        assert_eq!(Section::Home.label().get(Language::En), "Home");
    }
}
