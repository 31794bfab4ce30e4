//! Address lookup: validate input, query the service, normalize the results

use crate::postcode::AddressLookup;
use crate::state::{transform_all, AddressCandidate, WorkflowError};

/// Look up the candidate addresses for a zip code and house number.
///
/// Blank input fails with `MissingInput` before the service is contacted.
/// Candidates come back in the order the service returned them, each
/// carrying `house_number`.
pub async fn lookup(
    client: &dyn AddressLookup,
    zip_code: &str,
    house_number: &str,
) -> Result<Vec<AddressCandidate>, WorkflowError> {
    let zip_code = zip_code.trim();
    let house_number = house_number.trim();
    if zip_code.is_empty() || house_number.is_empty() {
        return Err(WorkflowError::MissingInput);
    }

    tracing::info!("Looking up addresses for {} {}", zip_code, house_number);

    let response = client
        .fetch_addresses(zip_code, house_number)
        .await
        .map_err(|e| {
            tracing::warn!("Address lookup failed: {:#}", e);
            WorkflowError::TransportFailure(e.to_string())
        })?;

    if !response.is_ok() || response.details.is_empty() {
        tracing::info!(
            "No addresses for {} {} (status {:?}, message {:?})",
            zip_code,
            house_number,
            response.status,
            response.errormessage
        );
        return Err(WorkflowError::NoResults);
    }

    let candidates = transform_all(&response.details, house_number);
    tracing::info!("Found {} addresses", candidates.len());
    Ok(candidates)
}
