use std::fmt;

use crate::{
    catalog::Catalog,
    error::LibraryError,
    events::LibraryEvent,
    ledger::BorrowLedger,
    observers::LibraryObserver,
    title::Title,
};

/// The library aggregate: owns the catalog and the borrow ledger and
/// coordinates transfers between them.
///
/// Titles only move via three operations: [`Library::add_book`] inserts
/// one, [`Library::borrow_book`] moves one from catalog to ledger, and
/// [`Library::return_book`] moves the oldest ledger entry back. No
/// operation drops or duplicates a title, including on allocation
/// failure: borrow reserves ledger capacity before touching the catalog.
#[derive(Default)]
pub struct Library {
    /// Available titles
    catalog: Catalog,
    /// Borrowed titles, oldest first
    ledger: BorrowLedger,
    /// Registered observers, notified after each successful mutation
    observers: Vec<Box<dyn LibraryObserver>>,
}

// Manual implementation of Debug: observer boxes are not Debug
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("catalog", &self.catalog)
            .field("ledger", &self.ledger)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Library {
    /// Create a library with an empty catalog and ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer to be notified of successful mutations
    pub fn register_observer(&mut self, observer: Box<dyn LibraryObserver>) {
        self.observers.push(observer);
    }

    /// Add a book to the available catalog; always succeeds
    pub fn add_book(&mut self, title: Title) {
        self.catalog.add(title.clone());
        self.notify(&LibraryEvent::Added(title));
    }

    /// Borrow a book: move `title` from the catalog to the ledger.
    ///
    /// Ledger capacity is reserved before the catalog is touched, so a
    /// failure leaves both structures exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::NotFound`] when no catalog entry matches
    /// `title`, and [`LibraryError::Allocation`] when the ledger
    /// reservation fails.
    pub fn borrow_book(&mut self, title: &Title) -> Result<(), LibraryError> {
        self.ledger.reserve(1)?;
        let removed = self
            .catalog
            .remove_by_title(title)
            .ok_or_else(|| LibraryError::NotFound(title.clone()))?;
        self.ledger.enqueue(removed.clone());
        self.notify(&LibraryEvent::Borrowed(removed));
        Ok(())
    }

    /// Return the earliest-borrowed book to the catalog and report which
    /// title came back.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Empty`] when nothing is borrowed; the
    /// catalog is left untouched.
    pub fn return_book(&mut self) -> Result<Title, LibraryError> {
        let title = self.ledger.dequeue_oldest().ok_or(LibraryError::Empty)?;
        self.catalog.add(title.clone());
        self.notify(&LibraryEvent::Returned(title.clone()));
        Ok(title)
    }

    /// All available titles, most recently added first
    #[must_use]
    pub fn list_available(&self) -> Vec<Title> {
        self.catalog.list_all()
    }

    /// All borrowed titles in borrow order, oldest first
    #[must_use]
    pub fn list_borrowed(&self) -> Vec<Title> {
        self.ledger.list_all()
    }

    /// Number of available titles
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of borrowed titles
    #[must_use]
    pub fn borrowed_count(&self) -> usize {
        self.ledger.len()
    }

    /// Notify every registered observer of a successful mutation
    fn notify(&self, event: &LibraryEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

// Implementing display for nicer output
impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} available, {} borrowed", self.catalog.len(), self.ledger.len())
    }
}

// Include tests module
#[cfg(test)]
mod tests;
