//! Shopping cart.
//!
//! The cart lives in the visitor's session. Every mutation goes through
//! [`Cart`] so that each line always holds between 1 and
//! [`Cart::MAX_LINE_QUANTITY`] copies.

use serde::{Deserialize, Serialize};

use super::id::BookId;
use super::localized::Localized;
use super::price::Price;

/// A book in the cart, with the catalog data captured when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: BookId,
    pub title: Localized,
    pub author: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Price of the line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Upper bound on copies of a single book.
    pub const MAX_LINE_QUANTITY: u32 = 99;

    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Add `quantity` copies of a book, merging with an existing line.
    ///
    /// The quantity carried by `item` is ignored; a quantity of zero adds one.
    pub fn add(&mut self, item: CartItem, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(Self::MAX_LINE_QUANTITY);
        } else {
            self.items.push(CartItem {
                quantity: quantity.min(Self::MAX_LINE_QUANTITY),
                ..item
            });
        }
    }

    /// Set the quantity of a line. Zero removes it; unknown books are ignored.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == *id) {
            line.quantity = quantity.min(Self::MAX_LINE_QUANTITY);
        }
    }

    /// Add one copy of a book already in the cart.
    pub fn increment(&mut self, id: &str) {
        if let Some(quantity) = self.get(id).map(|line| line.quantity) {
            self.set_quantity(id, quantity.saturating_add(1));
        }
    }

    /// Remove one copy; the line goes away when it reaches zero.
    pub fn decrement(&mut self, id: &str) {
        if let Some(quantity) = self.get(id).map(|line| line.quantity) {
            self.set_quantity(id, quantity.saturating_sub(1));
        }
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != *id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of copies across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Restore the line invariants on a cart read back from storage.
    ///
    /// Zero-quantity lines are dropped, duplicate books are merged into the
    /// first line and quantities are capped.
    #[must_use]
    pub fn normalize(self) -> Self {
        let mut cart = Self::new();
        for item in self.items {
            if item.quantity == 0 {
                continue;
            }
            let quantity = item.quantity;
            cart.add(item, quantity);
        }
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cents: u32) -> CartItem {
        CartItem {
            id: BookId::new(id),
            title: Localized::owned(id, id),
            author: "Author".to_string(),
            price: Price::from_cents(cents),
            image: format!("/static/images/covers/{id}.svg"),
            quantity: 1,
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_merges_repeat() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 1);
        cart.add(item("odyssey", 1200), 1);
        cart.add(item("meditations", 900), 1);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("odyssey").map(|l| l.quantity), Some(2));
    }

    #[test]
    fn test_add_zero_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 0);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_add_caps_quantity() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 90);
        cart.add(item("odyssey", 1200), 90);
        assert_eq!(
            cart.get("odyssey").map(|l| l.quantity),
            Some(Cart::MAX_LINE_QUANTITY)
        );
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 3);
        cart.set_quantity("odyssey", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 1);
        cart.set_quantity("missing", 5);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_decrement_from_one_removes() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 2);
        cart.decrement("odyssey");
        assert_eq!(cart.total_items(), 1);
        cart.decrement("odyssey");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 1);
        cart.increment("odyssey");
        cart.increment("missing");
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1200), 1);
        cart.add(item("meditations", 900), 1);
        assert!(cart.remove("odyssey"));
        assert!(!cart.remove("odyssey"));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add(item("odyssey", 1250), 2);
        cart.add(item("meditations", 990), 1);
        assert_eq!(cart.subtotal(), Price::from_cents(3490));
        assert_eq!(Cart::new().subtotal(), Price::ZERO);
    }

    #[test]
    fn test_normalize_repairs_stored_cart() {
        let stored = Cart {
            items: vec![
                CartItem {
                    quantity: 0,
                    ..item("ghost", 100)
                },
                CartItem {
                    quantity: 2,
                    ..item("odyssey", 1200)
                },
                CartItem {
                    quantity: 3,
                    ..item("odyssey", 1200)
                },
                CartItem {
                    quantity: 500,
                    ..item("meditations", 900)
                },
            ],
        };

        let cart = stored.normalize();
        assert_eq!(cart.len(), 2);
        assert!(cart.get("ghost").is_none());
        assert_eq!(cart.get("odyssey").map(|l| l.quantity), Some(5));
        assert_eq!(
            cart.get("meditations").map(|l| l.quantity),
            Some(Cart::MAX_LINE_QUANTITY)
        );
    }
}
