//! Supabase-backed stores.
//!
//! The settings table is reached through PostgREST (`/rest/v1`) and video
//! uploads through the storage API (`/storage/v1`). Both authenticate with
//! the project's service key, sent as `apikey` and as a bearer token.

pub mod settings;
pub mod storage;

pub use settings::SupabaseSettingsStore;
pub use storage::SupabaseObjectStore;

use learnhub_types::error::RepositoryError;
use secrecy::{ExposeSecret, SecretString};

/// Project URL and service key.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    url: String,
    service_key: SecretString,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, service_key: SecretString) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    /// Project base URL without a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Attach the `apikey` and bearer headers.
    pub(crate) fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.service_key.expose_secret();
        builder.header("apikey", key).bearer_auth(key)
    }
}

/// Send `builder` and turn transport failures and non-2xx answers into
/// [`RepositoryError`]s.
pub(crate) async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, RepositoryError> {
    let response = builder
        .send()
        .await
        .map_err(|e| RepositoryError::Connection(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RepositoryError::Query(format!("HTTP {status}: {body}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_trailing_slash_trimmed() {
        let config = SupabaseConfig::new("https://abc.supabase.co/", SecretString::from("k".to_string()));
        assert_eq!(config.url(), "https://abc.supabase.co");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let config = SupabaseConfig::new("https://abc.supabase.co", SecretString::from("service-secret".to_string()));
        assert!(!format!("{config:?}").contains("service-secret"));
    }
}
