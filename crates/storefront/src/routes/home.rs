//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog;
use crate::filters;
use crate::i18n::{COMPANY, common, home, labels, services};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::routes::mailto;
use crate::section::Section;
use crate::state::AppState;
use crate::views::{BookCard, CardLabels};

/// Books per shelf on the home page.
const SHELF_SIZE: usize = 4;

labels!(HomeLabels {
    hero_title => home::HERO_TITLE,
    hero_tagline => home::HERO_TAGLINE,
    explore_services => home::EXPLORE_SERVICES,
    request_consultation => common::REQUEST_CONSULTATION,
    services_title => services::HEADER_TITLE,
    services_intro => services::INTRO,
    learn_more => common::LEARN_MORE,
    why_title => home::WHY_TITLE,
    why_expertise => home::WHY_EXPERTISE,
    why_tailored => home::WHY_TAILORED,
    why_quality => home::WHY_QUALITY,
    why_partnership => home::WHY_PARTNERSHIP,
    new_releases => home::NEW_RELEASES,
    bestsellers => home::BESTSELLERS,
    view_all_books => home::VIEW_ALL_BOOKS,
    cta_title => home::CTA_TITLE,
    cta_text => home::CTA_TEXT,
});

/// Service teaser on the home page.
pub struct ServiceSummary {
    pub href: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub labels: HomeLabels,
    pub card_labels: CardLabels,
    pub services: Vec<ServiceSummary>,
    pub new_releases: Vec<BookCard>,
    pub bestsellers: Vec<BookCard>,
    pub consultation_mailto: String,
}

/// Display the home page.
#[instrument(skip_all, fields(language = %visitor.language))]
pub async fn home(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> impl IntoResponse {
    let language = visitor.language;

    let services = vec![
        ServiceSummary {
            href: "/services#publishing",
            title: services::PUBLISHING_TITLE.get(language),
            summary: services::PUBLISHING_SHORT.get(language),
        },
        ServiceSummary {
            href: "/services#bulk",
            title: services::BULK_TITLE.get(language),
            summary: services::BULK_SHORT.get(language),
        },
        ServiceSummary {
            href: "/services#rights",
            title: services::RIGHTS_TITLE.get(language),
            summary: services::RIGHTS_SHORT.get(language),
        },
    ];

    let mut new_releases = catalog::new_releases();
    new_releases.truncate(SHELF_SIZE);
    let mut bestsellers = catalog::bestsellers();
    bestsellers.truncate(SHELF_SIZE);

    HomeTemplate {
        layout: LayoutView::new(
            &state,
            &visitor,
            &nonce,
            Some(Section::Home),
            home::META_TITLE.get(language),
        )
        .with_description(home::HERO_TAGLINE.get(language)),
        labels: HomeLabels::new(language),
        card_labels: CardLabels::new(language),
        services,
        new_releases: BookCard::list(&new_releases, language),
        bestsellers: BookCard::list(&bestsellers, language),
        consultation_mailto: mailto(
            COMPANY.email,
            home::CONSULTATION_SUBJECT.get(language),
            None,
        ),
    }
}
