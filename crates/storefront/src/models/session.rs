//! Session keys.
//!
//! Everything a visitor chooses or collects lives in their session: the
//! language and theme preferences, the cart, the wishlist and the mock
//! profile. The
//! session store is in memory, so nothing outlives the process.

/// Session keys for visitor state.
pub mod keys {
    /// Preferred [`Language`](max_publishing_core::Language).
    pub const LANGUAGE: &str = "language";

    /// Preferred [`Theme`](max_publishing_core::Theme).
    pub const THEME: &str = "theme";

    /// The visitor's [`Cart`](max_publishing_core::Cart).
    pub const CART: &str = "cart";

    /// The visitor's [`Wishlist`](max_publishing_core::Wishlist).
    pub const WISHLIST: &str = "wishlist";

    /// The signed-in [`UserProfile`](max_publishing_core::UserProfile).
    pub const PROFILE: &str = "profile";
}
