use crate::events::LibraryEvent;

/// Trait for observing successful library mutations
pub trait LibraryObserver {
    /// Called after each successful add, borrow, or return
    fn on_event(&self, event: &LibraryEvent);
}

/// Logs every transfer as a single JSON record through the `log` facade
#[derive(Debug)]
pub struct TransferLogger;

impl LibraryObserver for TransferLogger {
    fn on_event(&self, event: &LibraryEvent) {
        match serde_json::to_string(event) {
            Ok(record) => log::info!("{record}"),
            Err(err) => log::warn!("failed to encode library event {event:?}: {err}"),
        }
    }
}

/// Prints the user-facing confirmation message for each operation
#[derive(Debug)]
pub struct ConsoleNotifier;

impl LibraryObserver for ConsoleNotifier {
    fn on_event(&self, event: &LibraryEvent) {
        match event {
            LibraryEvent::Added(title) => {
                println!("The book '{title}' was added to the library.");
            }
            LibraryEvent::Borrowed(title) => {
                println!("The book '{title}' was borrowed.");
            }
            LibraryEvent::Returned(_) => {
                println!("The book was returned to the library.");
            }
        }
    }
}
