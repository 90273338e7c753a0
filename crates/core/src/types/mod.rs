//! Core types for the MAX PUBLISHING storefront.
//!
//! This module provides type-safe wrappers for the site's domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod language;
pub mod localized;
pub mod price;
pub mod profile;
pub mod theme;
pub mod wishlist;

pub use cart::{Cart, CartItem};
pub use email::{Email, EmailError};
pub use id::*;
pub use language::{Language, LanguageError};
pub use localized::Localized;
pub use price::{Price, discount_percent};
pub use profile::{ProfileError, UserProfile, gravatar_url, long_date};
pub use theme::{Theme, ThemeError};
pub use wishlist::Wishlist;
