//! Book listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use max_publishing_core::Language;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{self, ALL_CATEGORIES, BookQuery, RELATED_LIMIT, SortKey};
use crate::filters;
use crate::i18n::{book, books, common, labels};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::routes::{NotFoundTemplate, mailto};
use crate::section::Section;
use crate::state::AppState;
use crate::views::{BookCard, CardLabels};

/// Quantities offered on the detail page.
const QUANTITY_CHOICES: u32 = 10;

// =============================================================================
// Listing
// =============================================================================

/// Raw listing query string.
///
/// Every field is optional and parsed leniently: unparsable prices fall back
/// to the defaults and unknown sort keys sort by title.
#[derive(Debug, Default, Deserialize)]
pub struct BooksParams {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
    pub view: Option<String>,
    pub q: Option<String>,
}

impl BooksParams {
    #[must_use]
    pub fn to_query(&self) -> BookQuery {
        let defaults = BookQuery::default();
        BookQuery {
            category: self.category.clone(),
            min_price: parse_price(self.min_price.as_deref()).unwrap_or(defaults.min_price),
            max_price: parse_price(self.max_price.as_deref()).unwrap_or(defaults.max_price),
            sort: self
                .sort
                .as_deref()
                .map_or(SortKey::default(), SortKey::parse_lenient),
            q: self.q.clone(),
        }
        .normalized()
    }

    /// Whether the list layout was requested; grid is the default.
    #[must_use]
    pub fn list_view(&self) -> bool {
        self.view.as_deref().is_some_and(|v| v.eq_ignore_ascii_case("list"))
    }
}

fn parse_price(value: Option<&str>) -> Option<Decimal> {
    value
        .map(|v| v.trim().replace(',', "."))
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<Decimal>().ok())
}

labels!(BooksLabels {
    title => books::TITLE,
    intro => books::INTRO,
    filters => books::FILTERS,
    search => books::SEARCH,
    search_placeholder => books::SEARCH_PLACEHOLDER,
    category => books::CATEGORY,
    all_categories => books::ALL_CATEGORIES,
    price_range => books::PRICE_RANGE,
    min_price => books::MIN_PRICE,
    max_price => books::MAX_PRICE,
    sort_by => books::SORT_BY,
    view => books::VIEW,
    grid => books::GRID,
    list => books::LIST,
    apply => books::APPLY,
    reset => books::RESET,
    results => books::RESULTS,
    no_results => books::NO_RESULTS,
});

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "books/index.html")]
pub struct BooksTemplate {
    pub layout: LayoutView,
    pub labels: BooksLabels,
    pub card_labels: CardLabels,
    pub books: Vec<BookCard>,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
    pub min_price: String,
    pub max_price: String,
    pub q: String,
    pub list_view: bool,
    pub grid_href: String,
    pub list_href: String,
}

fn sort_label(key: SortKey) -> &'static max_publishing_core::Localized {
    match key {
        SortKey::Title => &books::SORT_TITLE,
        SortKey::Author => &books::SORT_AUTHOR,
        SortKey::Price => &books::SORT_PRICE,
        SortKey::Rating => &books::SORT_RATING,
    }
}

/// Listing URL for the given query and layout.
fn listing_href(query: &BookQuery, list_view: bool) -> String {
    let mut url = form_urlencoded_pairs(query);
    url.push_str(if list_view { "&view=list" } else { "&view=grid" });
    format!("/books?{url}")
}

fn form_urlencoded_pairs(query: &BookQuery) -> String {
    let mut pairs = vec![
        format!("category={}", urlencoding::encode(query.category_id())),
        format!("min_price={}", query.min_price.normalize()),
        format!("max_price={}", query.max_price.normalize()),
        format!("sort={}", query.sort.as_str()),
    ];
    if let Some(q) = &query.q {
        pairs.push(format!("q={}", urlencoding::encode(q)));
    }
    pairs.join("&")
}

/// Display the book listing.
#[instrument(skip_all, fields(query = ?params))]
pub async fn index(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
    Query(params): Query<BooksParams>,
) -> impl IntoResponse {
    let language = visitor.language;
    let query = params.to_query();
    let list_view = params.list_view();
    let results = query.filter_and_sort(language);

    let mut categories = vec![SelectOption {
        value: ALL_CATEGORIES,
        label: books::ALL_CATEGORIES.get(language),
        selected: query.category.is_none(),
    }];
    categories.extend(catalog::categories().iter().map(|category| SelectOption {
        value: category.id,
        label: category.name.get(language),
        selected: query.category.as_deref() == Some(category.id),
    }));

    let sorts = SortKey::ALL
        .into_iter()
        .map(|key| SelectOption {
            value: key.as_str(),
            label: sort_label(key).get(language),
            selected: key == query.sort,
        })
        .collect();

    BooksTemplate {
        layout: LayoutView::new(
            &state,
            &visitor,
            &nonce,
            Some(Section::Books),
            books::META_TITLE.get(language),
        )
        .with_description(books::INTRO.get(language)),
        labels: BooksLabels::new(language),
        card_labels: CardLabels::new(language),
        books: BookCard::list(&results, language),
        categories,
        sorts,
        min_price: query.min_price.normalize().to_string(),
        max_price: query.max_price.normalize().to_string(),
        q: query.q.clone().unwrap_or_default(),
        list_view,
        grid_href: listing_href(&query, false),
        list_href: listing_href(&query, true),
    }
}

// =============================================================================
// Detail
// =============================================================================

labels!(BookLabels {
    back => book::BACK_TO_BOOKS,
    description => book::DESCRIPTION,
    details => book::DETAILS,
    author => book::AUTHOR,
    category => book::CATEGORY,
    published => book::PUBLISHED,
    quantity => book::QUANTITY,
    related => book::RELATED,
    free_shipping => book::FREE_SHIPPING,
    returns => book::RETURNS,
    add_to_wishlist => book::ADD_TO_WISHLIST,
    in_wishlist => book::IN_WISHLIST,
    share => book::SHARE,
});

#[derive(Template, WebTemplate)]
#[template(path = "books/show.html")]
pub struct BookTemplate {
    pub layout: LayoutView,
    pub labels: BookLabels,
    pub card_labels: CardLabels,
    pub book: BookCard,
    pub description: &'static str,
    /// Publication year; negative years are BC and shown as-is.
    pub published: Option<i32>,
    pub quantities: Vec<u32>,
    pub related: Vec<BookCard>,
    pub wishlisted: bool,
    pub share_href: String,
}

/// `mailto:` link that shares a book page, with no recipient filled in.
#[must_use]
pub fn share_link(base_url: &str, card: &BookCard, language: Language) -> String {
    let subject = format!("{}: {}", book::SHARE_SUBJECT.get(language), card.title);
    let body = format!(
        "{} {} {}\n{}{}",
        card.title,
        common::BY.get(language),
        card.author,
        base_url.trim_end_matches('/'),
        card.href
    );
    mailto("", &subject, Some(&body))
}

/// Display one book.
///
/// Unknown ids render the localized 404 page with a link back to the
/// listing.
#[instrument(skip(state, visitor, nonce))]
pub async fn show(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
    Path(id): Path<String>,
) -> Response {
    let language = visitor.language;

    let Some(found) = catalog::book(&id) else {
        tracing::debug!(%id, "unknown book");
        let mut page = NotFoundTemplate::page(&state, &visitor, &nonce);
        page.title = book::NOT_FOUND_TITLE.get(language);
        page.text = book::NOT_FOUND_TEXT.get(language);
        page.back_href = Section::Books.path();
        page.back_label = book::BACK_TO_BOOKS.get(language);
        return page.into_response_with_status();
    };

    let card = BookCard::new(found, language);
    let title = format!("{} | {}", card.title, found.author);
    let related = catalog::related(found, RELATED_LIMIT);

    BookTemplate {
        layout: LayoutView::new(&state, &visitor, &nonce, Some(Section::Books), title)
            .with_description(found.description.get(language)),
        labels: BookLabels::new(language),
        card_labels: CardLabels::new(language),
        description: found.description.get(language),
        published: found.published,
        quantities: (1..=QUANTITY_CHOICES).collect(),
        related: BookCard::list(&related, language),
        wishlisted: visitor.wishlist.contains(found.id),
        share_href: share_link(&state.config().base_url, &card, language),
        book: card,
    }
    .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BooksParams {
        let mut params = BooksParams::default();
        for (key, value) in pairs {
            let value = Some((*value).to_string());
            match *key {
                "category" => params.category = value,
                "min_price" => params.min_price = value,
                "max_price" => params.max_price = value,
                "sort" => params.sort = value,
                "view" => params.view = value,
                "q" => params.q = value,
                _ => {}
            }
        }
        params
    }

    #[test]
    fn test_to_query_defaults() {
        let query = params(&[]).to_query();
        assert_eq!(query, BookQuery::default());
    }

    #[test]
    fn test_to_query_lenient_prices() {
        let query = params(&[("min_price", "abc"), ("max_price", "12,5")]).to_query();
        assert_eq!(query.min_price, Decimal::ZERO);
        assert_eq!(query.max_price, Decimal::new(125, 1));
    }

    #[test]
    fn test_to_query_clamps_and_sorts() {
        let query = params(&[("min_price", "30"), ("max_price", "10"), ("sort", "rating")]).to_query();
        assert_eq!(query.max_price, Decimal::new(30, 0));
        assert_eq!(query.sort, SortKey::Rating);
    }

    #[test]
    fn test_list_view() {
        assert!(params(&[("view", "list")]).list_view());
        assert!(!params(&[("view", "grid")]).list_view());
        assert!(!params(&[]).list_view());
    }

    #[test]
    fn test_listing_href_keeps_filters() {
        let query = params(&[("category", "poetry"), ("q", "dante alighieri")]).to_query();
        let href = listing_href(&query, true);
        assert_eq!(
            href,
            "/books?category=poetry&min_price=0&max_price=100&sort=title&q=dante%20alighieri&view=list"
        );
    }

    #[test]
    fn test_share_link() {
        let card = BookCard::new(catalog::book("the-prince").unwrap(), Language::It);
        let link = share_link("https://maxpublishing.it/", &card, Language::It);
        assert!(link.starts_with("mailto:?subject=Guarda%20questo%20libro%3A%20Il%20Principe"));
        assert!(link.contains("%20di%20Niccol"));
        assert!(link.ends_with("%0Ahttps%3A%2F%2Fmaxpublishing.it%2Fbooks%2Fthe-prince"));
    }
}
