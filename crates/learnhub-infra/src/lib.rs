//! Infrastructure layer for the Learning Hub.
//!
//! Contains implementations of the ports defined in `learnhub-core`:
//! the OpenAI-compatible inference gateway client, the Supabase settings
//! table and storage bucket, and configuration loading.

pub mod config;
pub mod gateway;
pub mod supabase;

use std::time::Duration;

/// Build the HTTP client shared by the gateway and Supabase clients.
///
/// Only the connect phase is bounded; chat responses stream for as long as
/// the model keeps writing.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
}

#[cfg(test)]
pub(crate) mod test_server;
