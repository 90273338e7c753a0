//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::i18n::{CompanyView, about, footer, labels};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::section::Section;
use crate::state::AppState;

labels!(AboutLabels {
    title => about::HEADER_TITLE,
    profile_title => about::PROFILE_TITLE,
    profile_content => about::PROFILE_CONTENT,
    mission_title => about::MISSION_TITLE,
    mission_content => about::MISSION_CONTENT,
    vision_title => about::VISION_TITLE,
    vision_content => about::VISION_CONTENT,
    b2b_title => about::B2B_TITLE,
    b2b_content => about::B2B_CONTENT,
    facts_title => about::FACTS_TITLE,
    legal_form => about::LEGAL_FORM,
    founded => about::FOUNDED,
    fiscal_code => about::FISCAL_CODE,
    vat_number => footer::VAT_NUMBER,
    rea_number => footer::REA_NUMBER,
    share_capital => footer::SHARE_CAPITAL,
    registered_office => footer::REGISTERED_OFFICE,
    operational_office => footer::OPERATIONAL_OFFICE,
});

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: LayoutView,
    pub labels: AboutLabels,
    pub company: CompanyView,
}

/// Display the about page.
#[instrument(skip_all)]
pub async fn about(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> impl IntoResponse {
    let language = visitor.language;
    AboutTemplate {
        layout: LayoutView::new(
            &state,
            &visitor,
            &nonce,
            Some(Section::About),
            about::META_TITLE.get(language),
        ),
        labels: AboutLabels::new(language),
        company: CompanyView::new(language),
    }
}
