//! Address book submission: combine the selected candidate with personal info

use crate::state::{AddressBookEntry, AddressCandidate, WorkflowError};
use crate::store::AddressBookStore;
use std::collections::BTreeMap;

/// Merge the selected candidate with `personal_info` and add it to the book.
///
/// A missing selection, an empty candidate list and a selection that is not
/// in `candidates` all fail with `NoSelection`. The store is not consulted
/// about whether the entry was persisted.
pub fn submit(
    store: &mut dyn AddressBookStore,
    selected_id: Option<&str>,
    personal_info: &BTreeMap<String, String>,
    candidates: &[AddressCandidate],
) -> Result<AddressBookEntry, WorkflowError> {
    let Some(selected_id) = selected_id else {
        return Err(WorkflowError::NoSelection);
    };
    if candidates.is_empty() {
        return Err(WorkflowError::NoSelection);
    }

    let Some(candidate) = candidates.iter().find(|c| c.id == selected_id) else {
        tracing::warn!("Selected address {} is not among the candidates", selected_id);
        return Err(WorkflowError::NoSelection);
    };

    let entry = AddressBookEntry::merge(candidate, personal_info);
    store.add_entry(entry.clone());
    tracing::info!("Added {} to the address book", entry.full_name());
    Ok(entry)
}
