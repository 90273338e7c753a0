//! Legal content page route handlers.
//!
//! Serves the markdown privacy policy and terms of service in the visitor's
//! language, falling back to English.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use max_publishing_core::long_date;
use tracing::instrument;

use crate::filters;
use crate::i18n::legal;
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::routes::NotFoundTemplate;
use crate::section::Section;
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub layout: LayoutView,
    pub title: String,
    pub updated_label: &'static str,
    pub updated_at: Option<String>,
    /// Rendered from trusted markdown; raw HTML in the source is escaped.
    pub content_html: String,
}

fn serve_content_page(
    state: &AppState,
    visitor: &Visitor,
    nonce: &CspNonce,
    section: Section,
    slug: &str,
) -> Response {
    let language = visitor.language;
    let Some(page) = state.content().page(slug, language) else {
        tracing::warn!(slug, "content page missing");
        return NotFoundTemplate::page(state, visitor, nonce).into_response_with_status();
    };

    let mut layout = LayoutView::new(state, visitor, nonce, Some(section), page.meta.title.clone());
    if let Some(description) = &page.meta.description {
        layout = layout.with_description(description.clone());
    }

    ContentPageTemplate {
        layout,
        title: page.meta.title.clone(),
        updated_label: legal::LAST_UPDATED.get(language),
        updated_at: page.meta.updated_at.map(|date| long_date(date, language)),
        content_html: page.content_html.clone(),
    }
    .into_response()
}

/// Display the Privacy Policy page.
#[instrument(skip_all)]
pub async fn privacy(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> Response {
    serve_content_page(&state, &visitor, &nonce, Section::Privacy, "privacy")
}

/// Display the Terms of Service page.
#[instrument(skip_all)]
pub async fn terms(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> Response {
    serve_content_page(&state, &visitor, &nonce, Section::Terms, "terms")
}
