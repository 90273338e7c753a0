//! Session middleware configuration.
//!
//! Visitor sessions live in a `MemoryStore`. They hold the preferences, cart
//! and mock profile, and vanish when the process restarts.

use tower_sessions::{
    Expiry, MemoryStore, SessionManagerLayer,
    cookie::{SameSite, time::Duration},
};

use crate::config::StorefrontConfig;

pub const SESSION_COOKIE_NAME: &str = "mp_session";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Create the session layer.
///
/// Sessions expire after `session_expiry_days` without a request. The cookie
/// is `Secure` when the public base URL is HTTPS.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            i64::from(config.session_expiry_days) * SECONDS_PER_DAY,
        )))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
