//! Book views shared by the home, listing, category and detail pages.

use max_publishing_core::Language;

use crate::catalog::{Book, StarRating};
use crate::i18n::{common, labels};

labels!(CardLabels {
    add_to_cart => common::ADD_TO_CART,
    view_details => common::VIEW_DETAILS,
    new => common::NEW,
    bestseller => common::BESTSELLER,
    reviews => common::REVIEWS,
    by => common::BY,
    save => common::SAVE,
});

/// A book resolved for one language, as rendered by `partials/book_card.html`.
#[derive(Debug, Clone)]
pub struct BookCard {
    pub id: &'static str,
    pub href: String,
    pub title: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: Option<u32>,
    pub category_name: &'static str,
    pub category_color: &'static str,
    pub rating: String,
    pub reviews: u32,
    pub stars: StarRating,
    pub is_new: bool,
    pub is_bestseller: bool,
}

impl BookCard {
    #[must_use]
    pub fn new(book: &'static Book, language: Language) -> Self {
        let category = book.category();
        Self {
            id: book.id,
            href: format!("/books/{}", book.id),
            title: book.title.get(language),
            author: book.author,
            image: book.image,
            price: book.price.display(language),
            original_price: book.original_price.map(|p| p.display(language)),
            discount: book.discount_percent(),
            category_name: category.map_or("", |c| c.name.get(language)),
            category_color: category.map_or("", |c| c.color),
            rating: format_rating(book.rating, language),
            reviews: book.reviews,
            stars: StarRating::from_rating(book.rating),
            is_new: book.is_new,
            is_bestseller: book.is_bestseller,
        }
    }

    #[must_use]
    pub fn list(books: &[&'static Book], language: Language) -> Vec<Self> {
        books.iter().map(|&book| Self::new(book, language)).collect()
    }
}

/// One decimal, with the language's decimal separator.
fn format_rating(rating: f32, language: Language) -> String {
    let text = format!("{rating:.1}");
    match language {
        Language::En => text,
        Language::It => text.replace('.', ","),
    }
}
