//! Wishlist route handler.

use axum::{Form, response::Redirect};
use max_publishing_core::BookId;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::Visitor;
use crate::routes::local_redirect;

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub book_id: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Save or unsave a book, then go back to its page unless the form names
/// another local target.
///
/// # Errors
///
/// Returns 404 for unknown books.
#[instrument(skip(visitor))]
pub async fn toggle(mut visitor: Visitor, Form(form): Form<ToggleForm>) -> Result<Redirect> {
    let book = catalog::book(form.book_id.trim())
        .ok_or_else(|| AppError::NotFound(format!("book {}", form.book_id)))?;

    let mut wishlist = visitor.wishlist.clone();
    let saved = wishlist.toggle(BookId::new(book.id));
    visitor.save_wishlist(wishlist).await?;

    let message = if saved { "Saved to wishlist" } else { "Removed from wishlist" };
    add_breadcrumb("wishlist", message, Some(&[("book_id", book.id)]));
    tracing::info!(book_id = book.id, saved, "Wishlist toggled");

    let fallback = format!("/books/{}", book.id);
    Ok(Redirect::to(local_redirect(form.redirect.as_deref(), &fallback)))
}
