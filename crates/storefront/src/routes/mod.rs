//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - Company profile, mission and vision
//! GET  /services               - Publishing, bulk sales, rights & licensing
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /books                  - Listing with filters, sort and search
//! GET  /books/{id}             - Book detail and related books
//! GET  /categories             - Category tabs
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a book
//! POST /cart/update            - Set a line quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /checkout               - Redirect to the payment gateway
//! POST /wishlist/toggle        - Save or unsave a book
//!
//! # Visitor
//! GET  /contact                - Contact form
//! POST /contact                - Validate and prepare the email
//! GET  /profile                - Mock profile or sign-in form
//! POST /profile                - Edit profile
//! POST /profile/sign-in        - Mock sign-in
//! POST /profile/sign-out       - Sign out
//! POST /preferences/language   - Switch language
//! POST /preferences/theme      - Switch theme
//!
//! # Content
//! GET  /privacy                - Privacy policy
//! GET  /terms                  - Terms of service
//! ```

pub mod about;
pub mod books;
pub mod cart;
pub mod categories;
pub mod contact;
pub mod home;
pub mod pages;
pub mod preferences;
pub mod profile;
pub mod services;
pub mod wishlist;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::instrument;

use crate::filters;
use crate::i18n::{common, errors, labels};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor, contact_rate_limiter, sign_in_rate_limiter};
use crate::state::AppState;

/// Create the catalog routes router.
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(books::index))
        .route("/{id}", get(books::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::show).post(profile::update))
        .route(
            "/sign-in",
            post(profile::sign_in).layer(sign_in_rate_limiter()),
        )
        .route("/sign-out", post(profile::sign_out))
}

/// Create the preference routes router.
pub fn preference_routes() -> Router<AppState> {
    Router::new()
        .route("/language", post(preferences::set_language))
        .route("/theme", post(preferences::set_theme))
}

/// Create all routes for the storefront.
///
/// Rate limiters are built here, so every router gets its own buckets.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(about::about))
        .route("/services", get(services::services))
        .route("/categories", get(categories::index))
        .route(
            "/contact",
            get(contact::show).merge(post(contact::submit).layer(contact_rate_limiter())),
        )
        .route("/checkout", get(cart::checkout))
        .route("/wishlist/toggle", post(wishlist::toggle))
        .route("/privacy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        .route("/health", get(health))
        .nest("/books", book_routes())
        .nest("/cart", cart_routes())
        .nest("/profile", profile_routes())
        .nest("/preferences", preference_routes())
        .fallback(not_found)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve a form's `redirect` field.
///
/// Only local paths are followed: they must start with `/` but not `//`,
/// and may not contain a backslash. A missing field goes to `fallback`;
/// anything else goes home.
#[must_use]
pub fn local_redirect<'a>(target: Option<&'a str>, fallback: &'a str) -> &'a str {
    match target.map(str::trim).filter(|t| !t.is_empty()) {
        None => fallback,
        Some(target) if is_local_path(target) => target,
        Some(_) => "/",
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\')
}

/// Build a `mailto:` link with an encoded subject and optional body.
#[must_use]
pub fn mailto(to: &str, subject: &str, body: Option<&str>) -> String {
    let mut link = format!("mailto:{to}?subject={}", urlencoding::encode(subject));
    if let Some(body) = body {
        link.push_str("&body=");
        link.push_str(&urlencoding::encode(body));
    }
    link
}

labels!(NotFoundLabels {
    title => errors::NOT_FOUND_TITLE,
    text => errors::NOT_FOUND_TEXT,
    back => common::BACK_TO_HOME,
});

/// Localized 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate {
    pub layout: LayoutView,
    pub title: &'static str,
    pub text: &'static str,
    pub back_href: &'static str,
    pub back_label: &'static str,
}

impl NotFoundTemplate {
    /// The generic "page not found" view.
    #[must_use]
    pub fn page(state: &AppState, visitor: &Visitor, nonce: &CspNonce) -> Self {
        let labels = NotFoundLabels::new(visitor.language);
        Self {
            layout: LayoutView::new(
                state,
                visitor,
                nonce,
                None,
                errors::NOT_FOUND_META.get(visitor.language),
            ),
            title: labels.title,
            text: labels.text,
            back_href: "/",
            back_label: labels.back,
        }
    }

    #[must_use]
    pub fn into_response_with_status(self) -> Response {
        (StatusCode::NOT_FOUND, self).into_response()
    }
}

/// Fallback for unknown routes.
#[instrument(skip_all)]
async fn not_found(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> Response {
    NotFoundTemplate::page(&state, &visitor, &nonce).into_response_with_status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_redirect_accepts_local_paths() {
        assert_eq!(local_redirect(Some("/books?sort=price"), "/"), "/books?sort=price");
        assert_eq!(local_redirect(Some("/"), "/cart"), "/");
    }

    #[test]
    fn test_local_redirect_rejects_foreign_targets() {
        assert_eq!(local_redirect(Some("https://evil.example"), "/cart"), "/");
        assert_eq!(local_redirect(Some("//evil.example"), "/cart"), "/");
        assert_eq!(local_redirect(Some("/\\evil.example"), "/cart"), "/");
        assert_eq!(local_redirect(Some("books"), "/cart"), "/");
    }

    #[test]
    fn test_local_redirect_missing_uses_fallback() {
        assert_eq!(local_redirect(None, "/cart"), "/cart");
        assert_eq!(local_redirect(Some("  "), "/cart"), "/cart");
    }

    #[test]
    fn test_mailto_encodes() {
        assert_eq!(
            mailto("info@example.com", "Bulk Sales & More", None),
            "mailto:info@example.com?subject=Bulk%20Sales%20%26%20More"
        );
        assert_eq!(
            mailto("a@b.it", "Hi", Some("Line 1\nLine 2")),
            "mailto:a@b.it?subject=Hi&body=Line%201%0ALine%202"
        );
    }
}
