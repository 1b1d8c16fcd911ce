//! In-memory library catalog manager.
//!
//! This crate tracks which books are available and which are currently
//! borrowed: a [`Catalog`] of available titles, a FIFO [`BorrowLedger`]
//! of borrowed titles, and a [`Library`] aggregate coordinating the
//! transfers between them.

pub mod catalog;
pub mod error;
pub mod events;
pub mod ledger;
pub mod library;
pub mod menu;
pub mod observers;
pub mod title;

pub use catalog::Catalog;
pub use error::LibraryError;
pub use events::LibraryEvent;
pub use ledger::BorrowLedger;
pub use library::Library;
pub use title::Title;
