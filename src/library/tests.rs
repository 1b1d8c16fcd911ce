use std::{cell::RefCell, rc::Rc};

use crate::{
    error::LibraryError,
    events::LibraryEvent,
    ledger::BorrowLedger,
    library::Library,
    observers::LibraryObserver,
    title::{MAX_TITLE_LEN, Title},
};

/// Helper to build a library preloaded with the given titles
fn library_with(titles: &[&str]) -> Library {
    let mut library = Library::new();
    for title in titles {
        library.add_book(Title::new(*title));
    }
    library
}

/// Helper to compare a listing against expected raw strings
fn as_strings(titles: &[Title]) -> Vec<&str> {
    titles.iter().map(Title::as_str).collect()
}

#[test]
fn test_new_library_is_empty() {
    let library = Library::new();
    assert!(library.list_available().is_empty());
    assert!(library.list_borrowed().is_empty());
}

#[test]
#[allow(clippy::arithmetic_side_effects)]
fn test_conservation_across_operations() {
    let mut library = library_with(&["A", "B", "C"]);

    assert!(library.borrow_book(&Title::new("B")).is_ok());
    assert!(library.borrow_book(&Title::new("C")).is_ok());
    assert_eq!(library.available_count() + library.borrowed_count(), 3);

    assert!(library.return_book().is_ok());
    assert_eq!(library.available_count() + library.borrowed_count(), 3);

    // Failed operations do not change the total either
    assert!(library.borrow_book(&Title::new("Ghost")).is_err());
    assert_eq!(library.available_count() + library.borrowed_count(), 3);
}

#[test]
fn test_borrow_then_return_round_trip() {
    let mut library = library_with(&["Dune", "1984"]);

    assert!(library.borrow_book(&Title::new("Dune")).is_ok());
    let returned = library.return_book();
    assert!(matches!(returned, Ok(ref title) if title.as_str() == "Dune"));

    // Ledger is back to its prior (empty) state, Dune is available again
    assert!(library.list_borrowed().is_empty());
    assert!(library.list_available().contains(&Title::new("Dune")));
}

#[test]
fn test_return_follows_borrow_order() {
    let mut library = library_with(&["A", "B", "C"]);

    assert!(library.borrow_book(&Title::new("A")).is_ok());
    assert!(library.borrow_book(&Title::new("B")).is_ok());
    assert!(library.borrow_book(&Title::new("C")).is_ok());
    assert_eq!(as_strings(&library.list_borrowed()), ["A", "B", "C"]);

    let first = library.return_book();
    assert!(matches!(first, Ok(ref title) if title.as_str() == "A"));
    let second = library.return_book();
    assert!(matches!(second, Ok(ref title) if title.as_str() == "B"));
    assert_eq!(as_strings(&library.list_borrowed()), ["C"]);
}

#[test]
fn test_borrow_missing_title() {
    let mut library = Library::new();

    let result = library.borrow_book(&Title::new("Ghost"));
    assert!(matches!(result, Err(LibraryError::NotFound(ref title)) if title.as_str() == "Ghost"));

    // Neither structure was touched
    assert!(library.list_available().is_empty());
    assert!(library.list_borrowed().is_empty());
}

#[test]
fn test_return_with_nothing_borrowed() {
    let mut library = library_with(&["Dune"]);

    let result = library.return_book();
    assert!(matches!(result, Err(LibraryError::Empty)));

    // Catalog is unchanged
    assert_eq!(as_strings(&library.list_available()), ["Dune"]);
}

#[test]
fn test_borrow_and_return_scenario() {
    let mut library = library_with(&["Dune", "1984"]);

    assert!(library.borrow_book(&Title::new("Dune")).is_ok());
    assert_eq!(as_strings(&library.list_available()), ["1984"]);
    assert_eq!(as_strings(&library.list_borrowed()), ["Dune"]);

    let returned = library.return_book();
    assert!(matches!(returned, Ok(ref title) if title.as_str() == "Dune"));

    let available = library.list_available();
    assert_eq!(available.len(), 2);
    assert!(available.contains(&Title::new("Dune")));
    assert!(available.contains(&Title::new("1984")));
    assert!(library.list_borrowed().is_empty());
}

#[test]
fn test_listing_is_newest_first() {
    let library = library_with(&["First", "Second", "Third"]);
    assert_eq!(as_strings(&library.list_available()), ["Third", "Second", "First"]);
}

#[test]
fn test_duplicate_titles_are_independent_copies() {
    let mut library = library_with(&["Dune", "Dune"]);

    assert!(library.borrow_book(&Title::new("Dune")).is_ok());
    assert_eq!(library.available_count(), 1);
    assert_eq!(library.borrowed_count(), 1);

    // The second physical copy can still be borrowed
    assert!(library.borrow_book(&Title::new("Dune")).is_ok());
    assert_eq!(library.available_count(), 0);
    assert_eq!(as_strings(&library.list_borrowed()), ["Dune", "Dune"]);

    // A third borrow has no copy left to take
    assert!(library.borrow_book(&Title::new("Dune")).is_err());
}

#[test]
fn test_title_matching_is_exact() {
    let mut library = library_with(&["dune", "Moby Dick "]);

    assert!(matches!(
        library.borrow_book(&Title::new("Dune")),
        Err(LibraryError::NotFound(_))
    ));
    assert!(matches!(
        library.borrow_book(&Title::new("Moby Dick")),
        Err(LibraryError::NotFound(_))
    ));
    assert!(library.borrow_book(&Title::new("Moby Dick ")).is_ok());
}

#[test]
fn test_title_truncation() {
    let long_input = "x".repeat(240);
    let title = Title::new(long_input);
    assert_eq!(title.as_str().chars().count(), MAX_TITLE_LEN);

    // Truncation never splits a character
    let accented = "é".repeat(240);
    let title = Title::new(accented);
    assert_eq!(title.as_str().chars().count(), MAX_TITLE_LEN);
    assert!(title.as_str().chars().all(|c| c == 'é'));
}

#[test]
fn test_restored_entry_is_next_to_return() {
    let mut ledger = BorrowLedger::new();
    ledger.enqueue(Title::new("B"));
    ledger.restore_oldest(Title::new("A"));

    assert_eq!(ledger.dequeue_oldest(), Some(Title::new("A")));
    assert_eq!(ledger.dequeue_oldest(), Some(Title::new("B")));
    assert!(ledger.dequeue_oldest().is_none());
}

/// Observer that records every event it sees, for assertions
#[derive(Debug)]
struct RecordingObserver {
    /// Events in notification order
    seen: Rc<RefCell<Vec<LibraryEvent>>>,
}

impl LibraryObserver for RecordingObserver {
    fn on_event(&self, event: &LibraryEvent) {
        self.seen.borrow_mut().push(event.clone());
    }
}

#[test]
fn test_observers_see_each_successful_mutation() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut library = Library::new();
    library.register_observer(Box::new(RecordingObserver { seen: Rc::clone(&seen) }));

    library.add_book(Title::new("Dune"));
    assert!(library.borrow_book(&Title::new("Dune")).is_ok());
    assert!(library.return_book().is_ok());

    // Failed operations emit nothing
    assert!(library.borrow_book(&Title::new("Ghost")).is_err());

    let events = seen.borrow();
    assert_eq!(
        *events,
        vec![
            LibraryEvent::Added(Title::new("Dune")),
            LibraryEvent::Borrowed(Title::new("Dune")),
            LibraryEvent::Returned(Title::new("Dune")),
        ]
    );
}
