//! Errors surfaced to the user by the lookup and submission workflows

use thiserror::Error;

/// A recoverable workflow failure. The user retries by starting a new attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Please enter both a zip code and house number.")]
    MissingInput,

    #[error("Error fetching addresses: {0}")]
    TransportFailure(String),

    #[error("No addresses found for the given zip code and house number.")]
    NoResults,

    #[error("No address selected, try to select an address or find one if you haven't.")]
    NoSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_carries_message() {
        let err = WorkflowError::TransportFailure("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Error fetching addresses: connection refused"
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert!(WorkflowError::MissingInput.to_string().contains("zip code"));
        assert!(WorkflowError::NoResults.to_string().starts_with("No addresses"));
        assert!(WorkflowError::NoSelection
            .to_string()
            .starts_with("No address selected"));
    }
}
