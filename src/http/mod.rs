//! Alyvix Server API client: transport configuration, test case listing
//! and measure fetching.
mod client;
pub mod endpoints;
mod fetch;
mod list;
mod tls;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{AlyvixClient, ClientSettings};
pub use endpoints::normalize_base_url;
