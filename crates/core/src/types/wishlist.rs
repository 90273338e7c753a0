//! Books saved for later.

use serde::{Deserialize, Serialize};

use super::id::BookId;

/// The visitor's wishlist, in the order books were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    ids: Vec<BookId>,
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    #[must_use]
    pub fn ids(&self) -> &[BookId] {
        &self.ids
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| *saved == *id)
    }

    /// Save the book, or unsave it if it is already saved.
    ///
    /// Returns whether the book is saved afterwards.
    pub fn toggle(&mut self, id: BookId) -> bool {
        if self.remove(id.as_str()) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Returns `true` if the book was saved.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|saved| *saved != *id);
        self.ids.len() != before
    }

    /// Drop duplicates from a wishlist read back from storage, keeping the
    /// first occurrence.
    #[must_use]
    pub fn normalize(self) -> Self {
        let mut wishlist = Self::new();
        for id in self.ids {
            if !wishlist.contains(id.as_str()) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_saves_then_unsaves() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.toggle(BookId::new("the-odyssey")));
        assert!(wishlist.contains("the-odyssey"));
        assert_eq!(wishlist.len(), 1);

        assert!(!wishlist.toggle(BookId::new("the-odyssey")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_keeps_save_order() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(BookId::new("meditations"));
        wishlist.toggle(BookId::new("the-prince"));
        let ids: Vec<&str> = wishlist.ids().iter().map(BookId::as_str).collect();
        assert_eq!(ids, vec!["meditations", "the-prince"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(BookId::new("the-prince"));
        assert!(!wishlist.remove("frankenstein"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_normalize_drops_duplicates() {
        let stored: Wishlist =
            serde_json::from_str(r#"{"ids":["the-prince","meditations","the-prince"]}"#).unwrap();
        let wishlist = stored.normalize();
        assert_eq!(wishlist.len(), 2);
        assert_eq!(wishlist.ids().first().map(BookId::as_str), Some("the-prince"));
    }
}
