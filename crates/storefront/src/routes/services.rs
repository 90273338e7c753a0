//! Services page route handler.
//!
//! Three service blocks (publishing, bulk sales, rights & licensing), each
//! with a call to action that opens an email to the company with a
//! prefilled subject.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::i18n::{COMPANY, labels, services};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::routes::mailto;
use crate::section::Section;
use crate::state::AppState;

labels!(ServicesLabels {
    title => services::HEADER_TITLE,
    intro => services::INTRO,
    publishing_title => services::PUBLISHING_TITLE,
    publishing_summary => services::PUBLISHING_SUMMARY,
    publishing_intro => services::PUBLISHING_INTRO,
    custom_title => services::CUSTOM_TITLE,
    custom_text => services::CUSTOM_TEXT,
    editorial_title => services::EDITORIAL_TITLE,
    editorial_text => services::EDITORIAL_TEXT,
    translation_title => services::TRANSLATION_TITLE,
    translation_text => services::TRANSLATION_TEXT,
    content_dev_title => services::CONTENT_DEV_TITLE,
    content_dev_text => services::CONTENT_DEV_TEXT,
    publishing_cta => services::PUBLISHING_CTA,
    bulk_title => services::BULK_TITLE,
    bulk_summary => services::BULK_SUMMARY,
    bulk_intro => services::BULK_INTRO,
    bulk_benefits => services::BULK_BENEFITS,
    bulk_pricing => services::BULK_PRICING,
    bulk_account => services::BULK_ACCOUNT,
    bulk_custom => services::BULK_CUSTOM,
    bulk_fulfillment => services::BULK_FULFILLMENT,
    bulk_cta => services::BULK_CTA,
    rights_title => services::RIGHTS_TITLE,
    rights_summary => services::RIGHTS_SUMMARY,
    rights_intro => services::RIGHTS_INTRO,
    rights_translation_title => services::RIGHTS_TRANSLATION_TITLE,
    rights_translation_text => services::RIGHTS_TRANSLATION_TEXT,
    reprint_title => services::REPRINT_TITLE,
    reprint_text => services::REPRINT_TEXT,
    digital_title => services::DIGITAL_TITLE,
    digital_text => services::DIGITAL_TEXT,
    territorial_title => services::TERRITORIAL_TITLE,
    territorial_text => services::TERRITORIAL_TEXT,
    adaptation_title => services::ADAPTATION_TITLE,
    adaptation_text => services::ADAPTATION_TEXT,
    rights_cta => services::RIGHTS_CTA,
});

#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub layout: LayoutView,
    pub labels: ServicesLabels,
    pub publishing_mailto: String,
    pub bulk_mailto: String,
    pub rights_mailto: String,
}

/// Display the services page.
#[instrument(skip_all)]
pub async fn services(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> impl IntoResponse {
    let language = visitor.language;
    ServicesTemplate {
        layout: LayoutView::new(
            &state,
            &visitor,
            &nonce,
            Some(Section::Services),
            services::META_TITLE.get(language),
        )
        .with_description(services::INTRO.get(language)),
        labels: ServicesLabels::new(language),
        publishing_mailto: mailto(
            COMPANY.email,
            services::PUBLISHING_SUBJECT.get(language),
            None,
        ),
        bulk_mailto: mailto(COMPANY.email, services::BULK_SUBJECT.get(language), None),
        rights_mailto: mailto(COMPANY.email, services::RIGHTS_SUBJECT.get(language), None),
    }
}
