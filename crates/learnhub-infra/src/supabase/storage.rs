//! Public storage bucket for landing-page videos.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use learnhub_core::storage::ObjectStore;
use learnhub_types::error::RepositoryError;

use super::{SupabaseConfig, send};

/// [`ObjectStore`] backed by a public Supabase storage bucket.
#[derive(Debug, Clone)]
pub struct SupabaseObjectStore {
    client: reqwest::Client,
    config: SupabaseConfig,
    bucket: String,
}

impl SupabaseObjectStore {
    pub fn new(client: reqwest::Client, config: SupabaseConfig, bucket: impl Into<String>) -> Self {
        Self {
            client,
            config,
            bucket: bucket.into(),
        }
    }

    /// URL the object is publicly served at.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.config.url(),
            self.bucket
        )
    }
}

impl ObjectStore for SupabaseObjectStore {
    async fn upload(
        &self,
        path: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<String, RepositoryError> {
        let url = format!(
            "{}/storage/v1/object/{}/{path}",
            self.config.url(),
            self.bucket
        );
        let builder = self.config.authorize(
            self.client
                .post(url)
                .header("x-upsert", "true")
                .header(CONTENT_TYPE, content_type)
                .body(body),
        );
        send(builder).await?;
        Ok(self.public_url(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{CannedResponse, serve_once};
    use secrecy::SecretString;

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let (base, captured) =
            serve_once(CannedResponse::ok("application/json", r#"{"Key":"dlh-videos/demo-video-1.mp4"}"#)).await;
        let store = SupabaseObjectStore::new(
            reqwest::Client::new(),
            SupabaseConfig::new(&base, SecretString::from("service-key".to_string())),
            "dlh-videos",
        );

        let url = store
            .upload("demo-video-1.mp4", Bytes::from_static(b"video-bytes"), "video/mp4")
            .await
            .unwrap();
        assert_eq!(url, format!("{base}/storage/v1/object/public/dlh-videos/demo-video-1.mp4"));

        let req = captured.await.unwrap();
        assert_eq!(req.method, reqwest::Method::POST);
        assert_eq!(req.uri, "/storage/v1/object/dlh-videos/demo-video-1.mp4");
        assert_eq!(req.header("x-upsert").as_deref(), Some("true"));
        assert_eq!(req.header("content-type").as_deref(), Some("video/mp4"));
        assert_eq!(req.body, "video-bytes");
    }
}
