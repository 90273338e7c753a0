//! Catalog commands.

use std::fmt::Write as _;

use max_publishing_core::Language;
use max_publishing_storefront::catalog::{self, Book, Category};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown category: {0}. Valid categories: {1}")]
    UnknownCategory(String, String),

    #[error("Could not serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print the catalog, optionally narrowed to one category.
///
/// # Errors
///
/// Returns `CatalogError::UnknownCategory` for a category id not in the
/// catalog.
pub fn list(language: Language, category: Option<&str>) -> Result<(), CatalogError> {
    let books: Vec<&Book> = match category {
        Some(id) => {
            let category = catalog::category(id).ok_or_else(|| {
                let valid: Vec<&str> = catalog::categories().iter().map(|c| c.id).collect();
                CatalogError::UnknownCategory(id.to_string(), valid.join(", "))
            })?;
            catalog::books()
                .iter()
                .filter(|book| book.category == category.id)
                .collect()
        }
        None => catalog::books().iter().collect(),
    };

    tracing::debug!(count = books.len(), %language, "listing books");

    #[allow(clippy::print_stdout)]
    {
        print!("{}", render_table(&books, language));
    }
    Ok(())
}

#[derive(Serialize)]
struct Export {
    categories: &'static [Category],
    books: &'static [Book],
}

/// Print books and categories as pretty JSON.
///
/// # Errors
///
/// Returns `CatalogError::Json` if serialization fails.
pub fn export() -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(&Export {
        categories: catalog::categories(),
        books: catalog::books(),
    })?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}

fn render_table(books: &[&Book], language: Language) -> String {
    let mut out = format!(
        "{:<28} {:<36} {:<22} {:<16} {:>9} {:>6}\n",
        "ID", "TITLE", "AUTHOR", "CATEGORY", "PRICE", "RATING"
    );
    for book in books {
        let category = book
            .category()
            .map_or(book.category, |category| category.name.get(language));
        let _ = writeln!(
            out,
            "{:<28} {:<36} {:<22} {:<16} {:>9} {:>6.1}",
            book.id,
            book.title.get(language),
            book.author,
            category,
            book.price.display(language),
            book.rating,
        );
    }
    let _ = writeln!(out, "{} books", books.len());
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_localizes_rows() {
        let book = catalog::book("the-prince").unwrap();
        let table = render_table(&[book], Language::It);
        assert!(table.starts_with("ID"));
        assert!(table.contains("Il Principe"));
        assert!(table.contains("Filosofia"));
        assert!(table.ends_with("1 books\n"));
    }

    #[test]
    fn test_list_rejects_unknown_category() {
        let err = list(Language::En, Some("cookbooks")).unwrap_err();
        assert!(err.to_string().contains("cookbooks"));
        assert!(err.to_string().contains("poetry"));
    }

    #[test]
    fn test_export_json_shape() {
        let value = serde_json::to_value(Export {
            categories: catalog::categories(),
            books: catalog::books(),
        })
        .unwrap();
        assert_eq!(value["categories"].as_array().unwrap().len(), 5);
        assert_eq!(value["books"].as_array().unwrap().len(), catalog::books().len());
        assert_eq!(value["books"][0]["id"], "i-promessi-sposi");
    }
}
