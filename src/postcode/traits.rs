//! Trait abstraction for the postcode lookup service to enable mocking in tests

use crate::state::LookupResponse;
use anyhow::Result;
use async_trait::async_trait;

/// Looks up the addresses registered under a zip code and house number.
///
/// Any error is a transport failure: unreachable service, non-success HTTP
/// status, timeout or an undecodable body. A decoded payload reporting
/// "no results" is not an error here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn fetch_addresses(&self, zip_code: &str, house_number: &str) -> Result<LookupResponse>;
}
