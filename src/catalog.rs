use serde::{Deserialize, Serialize};

use crate::title::Title;

/// The collection of currently available (not borrowed) titles.
///
/// Duplicates are permitted: adding a title already present creates a
/// second independent entry. Listing order is most-recently-added first,
/// and [`Catalog::remove_by_title`] removes the first match in that same
/// order, so removal always takes the entry the user sees listed first.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    /// Available titles in insertion order (listing walks this in reverse)
    books: Vec<Title>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a title as a new available entry; always succeeds
    pub fn add(&mut self, title: Title) {
        self.books.push(title);
    }

    /// Remove and return the first entry exactly matching `title` in
    /// listing order, or `None` when no entry matches
    pub fn remove_by_title(&mut self, title: &Title) -> Option<Title> {
        // Newest-first listing means the first listed match is the last
        // occurrence in insertion order.
        let pos = self.books.iter().rposition(|t| t == title)?;
        Some(self.books.remove(pos))
    }

    /// All current titles in listing order; empty is a valid result
    #[must_use]
    pub fn list_all(&self) -> Vec<Title> {
        self.books.iter().rev().cloned().collect()
    }

    /// Number of available titles
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no available titles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
