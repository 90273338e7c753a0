//! MAX PUBLISHING Core - Shared types library.
//!
//! This crate provides the domain types used across the workspace:
//! - `storefront` - Public bilingual website and mock bookstore
//! - `cli` - Operator tools for the catalog and translations
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no session handling. Everything here can be unit tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Languages, themes, localized text, prices, emails, the cart,
//!   the wishlist and the mock user profile

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
