//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, one hub per request)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP built from the nonce, frame and referrer policies)
//! 5. CSP nonce (generate per-request nonce for inline scripts)
//! 6. Session layer (tower-sessions with an in-memory store)
//! 7. Rate limiting on form posts (governor)
//!
//! [`Visitor`] is the extractor handlers use to read and update the
//! session-held preferences, cart and profile.

pub mod csp;
pub mod preferences;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use preferences::Visitor;
pub use rate_limit::{contact_rate_limiter, sign_in_rate_limiter};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
