//! In-process store implementations.
//!
//! Used when running without the hosted backend (local previews) and as
//! deterministic collaborators in tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use bytes::Bytes;
use learnhub_types::error::RepositoryError;
use learnhub_types::settings::SettingRow;
use serde_json::Value;

use super::object_store::ObjectStore;
use super::settings_store::SettingsStore;

/// Settings store backed by an ordered map.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    values: Mutex<BTreeMap<String, Value>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let values = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            values: Mutex::new(values),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Value>>, RepositoryError> {
        self.values
            .lock()
            .map_err(|_| RepositoryError::Connection("in-memory store lock poisoned".to_string()))
    }
}

impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), RepositoryError> {
        self.lock()?.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .map(|(key, value)| SettingRow {
                key: key.clone(),
                value: Some(value.clone()),
                updated_at: None,
            })
            .collect())
    }
}

/// Object store that keeps uploads in memory and serves them under `base_url`.
#[derive(Debug)]
pub struct InMemoryObjectStore {
    base_url: String,
    objects: Mutex<BTreeMap<String, (String, Bytes)>>,
}

impl InMemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::new(BTreeMap::new()),
        }
    }

    /// Stored `(content_type, body)` for `path`.
    pub fn object(&self, path: &str) -> Option<(String, Bytes)> {
        self.objects.lock().ok()?.get(path).cloned()
    }
}

impl ObjectStore for InMemoryObjectStore {
    async fn upload(
        &self,
        path: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<String, RepositoryError> {
        self.objects
            .lock()
            .map_err(|_| RepositoryError::Connection("in-memory store lock poisoned".to_string()))?
            .insert(path.to_string(), (content_type.to_string(), body));
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_settings_roundtrip() {
        let store = InMemorySettingsStore::new();
        assert!(store.get("site_name").await.unwrap().is_none());

        store.set("site_name", &json!("DLH")).await.unwrap();
        store.set("site_name", &json!("DLH Academy")).await.unwrap();

        assert_eq!(store.get("site_name").await.unwrap(), Some(json!("DLH Academy")));
        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_object_upload_returns_public_url() {
        let store = InMemoryObjectStore::new("https://cdn.example/videos/");
        let url = store
            .upload("demo-video-1.mp4", Bytes::from_static(b"abc"), "video/mp4")
            .await
            .unwrap();
        assert_eq!(url, "https://cdn.example/videos/demo-video-1.mp4");
        let (content_type, body) = store.object("demo-video-1.mp4").unwrap();
        assert_eq!(content_type, "video/mp4");
        assert_eq!(body.as_ref(), b"abc");
    }
}
