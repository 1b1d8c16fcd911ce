use serde::{Deserialize, Serialize};

use crate::title::Title;

/// A successful mutation of the library, as reported to observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LibraryEvent {
    /// A title was added to the available catalog
    Added(Title),
    /// A title moved from the catalog to the borrow ledger
    Borrowed(Title),
    /// The oldest borrowed title moved back to the catalog
    Returned(Title),
}
