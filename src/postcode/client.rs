//! HTTP client for the postcode lookup service
//!
//! Issues `GET {url}?postcode=..&streetnumber=..&ref=..&type=json` and
//! decodes the JSON payload into a [`LookupResponse`].

use super::traits::AddressLookup;
use crate::config::TuiConfig;
use crate::state::LookupResponse;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Client for the postcode lookup service
pub struct PostcodeClient {
    /// The HTTP client, carrying the lookup timeout
    http: reqwest::Client,
    /// Lookup endpoint
    url: String,
    /// Referrer sent as the `ref` parameter
    reference: String,
}

impl PostcodeClient {
    /// Create a new client from the user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs()))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            url: config.lookup_url(),
            reference: config.lookup_ref().to_string(),
        })
    }

    fn build_request(&self, zip_code: &str, house_number: &str) -> Result<reqwest::Request> {
        self.http
            .get(&self.url)
            .query(&[
                ("postcode", zip_code),
                ("streetnumber", house_number),
                ("ref", self.reference.as_str()),
                ("type", "json"),
            ])
            .build()
            .map_err(|e| anyhow!("Invalid lookup request: {}", e))
    }
}

#[async_trait]
impl AddressLookup for PostcodeClient {
    async fn fetch_addresses(&self, zip_code: &str, house_number: &str) -> Result<LookupResponse> {
        let request = self.build_request(zip_code, house_number)?;
        tracing::debug!("GET {}", request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| anyhow!("Failed to reach lookup service: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Failed to fetch addresses (HTTP {})", status));
        }

        response
            .json::<LookupResponse>()
            .await
            .map_err(|e| anyhow!("Invalid lookup response: {}", e))
    }
}
