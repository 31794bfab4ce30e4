//! Address book storage

mod json_store;
mod traits;

pub use json_store::JsonAddressBook;
pub use traits::{AddressBookStore, StoredEntry};

#[cfg(test)]
pub use traits::MockAddressBookStore;
