use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{error::LibraryError, title::Title};

/// The FIFO record of currently borrowed titles, oldest first.
///
/// Entries are ordered strictly by borrow time; duplicates are permitted
/// because each entry is a distinct physical copy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BorrowLedger {
    /// Borrowed titles, front = earliest borrowed
    entries: VecDeque<Title>,
}

impl BorrowLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve capacity for `additional` entries up front.
    ///
    /// The coordinator calls this before removing a title from the
    /// catalog so a failed allocation can never strand a removed title.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Allocation`] when the reservation fails.
    pub fn reserve(&mut self, additional: usize) -> Result<(), LibraryError> {
        self.entries.try_reserve(additional)?;
        Ok(())
    }

    /// Append a title at the tail (most recently borrowed)
    pub fn enqueue(&mut self, title: Title) {
        self.entries.push_back(title);
    }

    /// Remove and return the earliest-borrowed title, or `None` when the
    /// ledger is empty
    pub fn dequeue_oldest(&mut self) -> Option<Title> {
        self.entries.pop_front()
    }

    /// Put a title back at the head, making it the next to be returned
    pub fn restore_oldest(&mut self, title: Title) {
        self.entries.push_front(title);
    }

    /// All borrowed titles in borrow order, oldest first
    #[must_use]
    pub fn list_all(&self) -> Vec<Title> {
        self.entries.iter().cloned().collect()
    }

    /// Number of borrowed titles
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is currently borrowed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
