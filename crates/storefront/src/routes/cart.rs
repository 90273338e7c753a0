//! Cart route handlers.
//!
//! The cart lives in the visitor session. Mutations are plain form posts that
//! redirect back (303), so the pages work without JavaScript.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use max_publishing_core::{Cart, Language, Price};
use serde::Deserialize;
use tracing::instrument;
use url::Url;
use uuid::Uuid;

use crate::catalog;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::i18n::{cart, labels};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::routes::local_redirect;
use crate::section::Section;
use crate::state::AppState;

// =============================================================================
// Forms
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub book_id: String,
    /// Defaults to one copy.
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub book_id: String,
    pub quantity: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub book_id: String,
}

fn parse_quantity(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::BadRequest(format!("invalid quantity `{value}`")))
}

// =============================================================================
// Views
// =============================================================================

labels!(CartLabels {
    title => cart::TITLE,
    empty_title => cart::EMPTY_TITLE,
    empty_text => cart::EMPTY_TEXT,
    browse => cart::BROWSE,
    continue_shopping => cart::CONTINUE,
    summary => cart::SUMMARY,
    subtotal => cart::SUBTOTAL,
    items => cart::ITEMS,
    shipping => cart::SHIPPING,
    free => cart::FREE,
    total => cart::TOTAL,
    checkout => cart::CHECKOUT,
    checkout_note => cart::CHECKOUT_NOTE,
    clear => cart::CLEAR,
    remove => cart::REMOVE,
    increase => cart::INCREASE,
    decrease => cart::DECREASE,
    free_shipping => cart::FREE_SHIPPING,
    returns => cart::RETURNS,
});

/// A cart line resolved for one language.
pub struct CartLine {
    pub id: String,
    pub href: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub unit_price: String,
    pub line_total: String,
    pub quantity: u32,
    pub increase_to: u32,
    pub decrease_to: u32,
    pub at_max: bool,
}

impl CartLine {
    fn list(cart: &Cart, language: Language) -> Vec<Self> {
        cart.items()
            .iter()
            .map(|item| Self {
                id: item.id.to_string(),
                href: format!("/books/{}", item.id),
                title: item.title.get(language).to_string(),
                author: item.author.clone(),
                image: item.image.clone(),
                unit_price: item.price.display(language),
                line_total: item.line_total().display(language),
                quantity: item.quantity,
                increase_to: item.quantity.saturating_add(1).min(Cart::MAX_LINE_QUANTITY),
                decrease_to: item.quantity.saturating_sub(1),
                at_max: item.quantity >= Cart::MAX_LINE_QUANTITY,
            })
            .collect()
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: LayoutView,
    pub labels: CartLabels,
    pub lines: Vec<CartLine>,
    pub total_items: u32,
    pub subtotal: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip_all, fields(items = visitor.cart.total_items()))]
pub async fn show(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> impl IntoResponse {
    let language = visitor.language;
    CartShowTemplate {
        layout: LayoutView::new(
            &state,
            &visitor,
            &nonce,
            Some(Section::Cart),
            cart::META_TITLE.get(language),
        ),
        labels: CartLabels::new(language),
        lines: CartLine::list(&visitor.cart, language),
        total_items: visitor.cart.total_items(),
        subtotal: visitor.cart.subtotal().display(language),
    }
}

/// Add a book to the cart.
///
/// # Errors
///
/// Returns 404 for unknown books and 400 for a malformed quantity.
#[instrument(skip(visitor))]
pub async fn add(mut visitor: Visitor, Form(form): Form<AddForm>) -> Result<Redirect> {
    let book = catalog::book(form.book_id.trim())
        .ok_or_else(|| AppError::NotFound(format!("book {}", form.book_id)))?;
    let quantity = match form.quantity.as_deref().map(str::trim) {
        None | Some("") => 1,
        Some(value) => parse_quantity(value)?,
    };

    let mut cart = visitor.cart.clone();
    cart.add(book.to_cart_item(), quantity);
    visitor.save_cart(cart).await?;

    add_breadcrumb("cart", "Added to cart", Some(&[("book_id", book.id)]));
    tracing::info!(book_id = book.id, quantity, "Added to cart");

    Ok(Redirect::to(local_redirect(
        form.redirect.as_deref(),
        Section::Cart.path(),
    )))
}

/// Set the quantity of a line; zero removes it.
///
/// # Errors
///
/// Returns 400 for a malformed quantity.
#[instrument(skip(visitor))]
pub async fn update(mut visitor: Visitor, Form(form): Form<UpdateForm>) -> Result<Redirect> {
    let quantity = parse_quantity(&form.quantity)?;

    let mut cart = visitor.cart.clone();
    cart.set_quantity(form.book_id.trim(), quantity);
    visitor.save_cart(cart).await?;

    Ok(Redirect::to(Section::Cart.path()))
}

/// Remove a line.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip(visitor))]
pub async fn remove(mut visitor: Visitor, Form(form): Form<RemoveForm>) -> Result<Redirect> {
    let mut cart = visitor.cart.clone();
    if cart.remove(form.book_id.trim()) {
        add_breadcrumb("cart", "Removed from cart", Some(&[("book_id", form.book_id.as_str())]));
    }
    visitor.save_cart(cart).await?;

    Ok(Redirect::to(Section::Cart.path()))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip_all)]
pub async fn clear(mut visitor: Visitor) -> Result<Redirect> {
    visitor.save_cart(Cart::new()).await?;
    Ok(Redirect::to(Section::Cart.path()))
}

/// Cart count badge fragment.
#[instrument(skip_all)]
pub async fn count(visitor: Visitor) -> impl IntoResponse {
    CartCountTemplate {
        count: visitor.cart.total_items(),
    }
}

/// Build the payment gateway URL for a cart subtotal.
#[must_use]
pub fn gateway_url(base: &Url, order_id: Uuid, amount: Price, language: Language) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("orderId", &order_id.to_string())
        .append_pair("amount", &amount.to_plain_string())
        .append_pair("currency", Price::CURRENCY_CODE)
        .append_pair("lang", language.code());
    url
}

/// Redirect to the external payment gateway.
///
/// An empty cart goes back to the cart page. The cart is kept: the gateway
/// never reports back.
#[instrument(skip_all)]
pub async fn checkout(State(state): State<AppState>, visitor: Visitor) -> Response {
    if visitor.cart.is_empty() {
        return Redirect::to(Section::Cart.path()).into_response();
    }

    let order_id = Uuid::new_v4();
    let amount = visitor.cart.subtotal();
    let url = gateway_url(
        &state.config().checkout_gateway_url,
        order_id,
        amount,
        visitor.language,
    );

    add_breadcrumb("checkout", "Redirecting to payment gateway", None);
    tracing::info!(
        %order_id,
        amount = %amount.to_plain_string(),
        items = visitor.cart.total_items(),
        "Checkout started"
    );

    Redirect::to(url.as_str()).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("many").is_err());
    }

    #[test]
    fn test_gateway_url() {
        let base = Url::parse("https://pay.example.com/gateway").unwrap();
        let order_id = Uuid::nil();
        let url = gateway_url(&base, order_id, Price::from_cents(2980), Language::It);
        assert_eq!(
            url.as_str(),
            "https://pay.example.com/gateway?orderId=00000000-0000-0000-0000-000000000000&amount=29.80&currency=EUR&lang=it"
        );
    }

    #[test]
    fn test_gateway_url_keeps_existing_query() {
        let base = Url::parse("https://pay.example.com/gw?merchant=42").unwrap();
        let url = gateway_url(&base, Uuid::nil(), Price::from_cents(100), Language::En);
        assert!(url.as_str().starts_with("https://pay.example.com/gw?merchant=42&orderId="));
        assert!(url.as_str().ends_with("&amount=1.00&currency=EUR&lang=en"));
    }

    #[test]
    fn test_cart_lines_step_quantities() {
        let mut cart = Cart::new();
        cart.add(catalog::book("the-odyssey").unwrap().to_cart_item(), 2);
        let lines = CartLine::list(&cart, Language::En);
        let line = lines.first().unwrap();
        assert_eq!(line.increase_to, 3);
        assert_eq!(line.decrease_to, 1);
        assert_eq!(line.line_total, "€31.00");
        assert!(!line.at_max);
    }
}
