use std::collections::TryReserveError;

use crate::title::Title;

/// Custom error type for library operations
///
/// Every variant is recoverable: the caller reports the message and the
/// library state is left exactly as it was before the failed call.
#[derive(thiserror::Error, Debug)]
pub enum LibraryError {
    /// A borrow was requested for a title absent from the catalog
    #[error("The book '{0}' was not found in the library.")]
    NotFound(Title),
    /// A return was requested with no borrowed books outstanding
    #[error("There are no borrowed books to return.")]
    Empty,
    /// Reserving space in the borrow ledger failed
    #[error("Memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}
