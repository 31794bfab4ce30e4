//! Trait abstraction for the address book store to enable mocking in tests

use crate::state::AddressBookEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry as kept by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub entry: AddressBookEntry,
    pub added_at: DateTime<Utc>,
}

/// Destination for finalized address book entries.
///
/// Adding is fire-and-forget: implementations deal with (and log) their own
/// persistence failures instead of reporting them to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait AddressBookStore: Send {
    /// Add an entry to the book
    fn add_entry(&mut self, entry: AddressBookEntry);

    /// Entries in the order they were added
    fn entries(&self) -> Vec<StoredEntry>;
}
