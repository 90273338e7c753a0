//! Category browser route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{self, ALL_CATEGORIES, BookQuery};
use crate::filters;
use crate::i18n::{categories, labels};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::section::Section;
use crate::state::AppState;
use crate::views::{BookCard, CardLabels};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

labels!(CategoriesLabels {
    title => categories::TITLE,
    intro => categories::INTRO,
    books_count => categories::BOOKS_COUNT,
    empty => categories::EMPTY,
});

pub struct CategoryTab {
    pub href: String,
    pub name: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub active: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub layout: LayoutView,
    pub labels: CategoriesLabels,
    pub card_labels: CardLabels,
    pub tabs: Vec<CategoryTab>,
    pub books: Vec<BookCard>,
}

/// Display the category tabs and the books of the selected one.
///
/// Unknown category ids show every book.
#[instrument(skip_all, fields(category = ?params.category))]
pub async fn index(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
    Query(params): Query<CategoryParams>,
) -> impl IntoResponse {
    let language = visitor.language;
    let selected = params
        .category
        .as_deref()
        .and_then(catalog::category)
        .map(|category| category.id);

    let mut tabs = vec![CategoryTab {
        href: format!("/categories?category={ALL_CATEGORIES}"),
        name: categories::ALL.get(language),
        color: "",
        count: catalog::books().len(),
        active: selected.is_none(),
    }];
    tabs.extend(catalog::categories().iter().map(|category| CategoryTab {
        href: format!("/categories?category={}", category.id),
        name: category.name.get(language),
        color: category.color,
        count: catalog::category_count(category.id),
        active: selected == Some(category.id),
    }));

    let books = BookQuery::category_only(selected).filter_and_sort(language);

    CategoriesTemplate {
        layout: LayoutView::new(
            &state,
            &visitor,
            &nonce,
            Some(Section::Categories),
            categories::META_TITLE.get(language),
        ),
        labels: CategoriesLabels::new(language),
        card_labels: CardLabels::new(language),
        tabs,
        books: BookCard::list(&books, language),
    }
}
