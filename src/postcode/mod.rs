//! Postcode lookup module for HTTP communication

mod client;
mod traits;

pub use client::PostcodeClient;
pub use traits::AddressLookup;

#[cfg(test)]
pub use traits::MockAddressLookup;
