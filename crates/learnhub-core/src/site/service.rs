//! Site settings service.
//!
//! Reads and writes the landing page's settings and uploads its two
//! promotional videos. Reads fall back to defaults; writes report errors.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use learnhub_types::error::RepositoryError;
use learnhub_types::settings::{SettingRow, SiteSettings, VideoKind};
use serde_json::Value;

use crate::storage::{BoxObjectStore, BoxSettingsStore};

/// Extension used when the uploaded file name has no usable one.
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

pub struct SiteService {
    settings: Option<Arc<BoxSettingsStore>>,
    objects: Option<Arc<BoxObjectStore>>,
}

impl SiteService {
    pub fn new(
        settings: Option<Arc<BoxSettingsStore>>,
        objects: Option<Arc<BoxObjectStore>>,
    ) -> Self {
        Self { settings, objects }
    }

    fn settings(&self) -> Result<&BoxSettingsStore, RepositoryError> {
        self.settings
            .as_deref()
            .ok_or_else(|| RepositoryError::NotConfigured("settings store".to_string()))
    }

    fn objects(&self) -> Result<&BoxObjectStore, RepositoryError> {
        self.objects
            .as_deref()
            .ok_or_else(|| RepositoryError::NotConfigured("object store".to_string()))
    }

    /// Resolved site settings. Any store failure yields the defaults.
    pub async fn load(&self) -> SiteSettings {
        match self.list_rows().await {
            Ok(rows) => SiteSettings::from_rows(&rows),
            Err(RepositoryError::NotConfigured(_)) => SiteSettings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load site settings, using defaults");
                SiteSettings::default()
            }
        }
    }

    pub async fn list_rows(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        self.settings()?.list().await
    }

    /// Upsert one key.
    pub async fn save(&self, key: &str, value: &Value) -> Result<(), RepositoryError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(RepositoryError::Invalid("setting key must not be empty".to_string()));
        }
        self.settings()?.set(key, value).await?;
        tracing::info!(key, "setting saved");
        Ok(())
    }

    /// Upsert all nine site-settings keys. Stops at the first failure.
    pub async fn save_site_settings(&self, site: &SiteSettings) -> Result<(), RepositoryError> {
        let store = self.settings()?;
        for (key, value) in site.pairs() {
            store.set(key, &Value::String(value.to_string())).await?;
        }
        tracing::info!("site settings saved");
        Ok(())
    }

    /// Upload a video and record its public URL under the kind's settings key.
    pub async fn upload_video(
        &self,
        kind: VideoKind,
        file_name: Option<&str>,
        content_type: &str,
        body: Bytes,
    ) -> Result<String, RepositoryError> {
        let unix_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        self.upload_video_at(kind, file_name, content_type, body, unix_millis)
            .await
    }

    /// [`SiteService::upload_video`] with an explicit timestamp for the object path.
    pub async fn upload_video_at(
        &self,
        kind: VideoKind,
        file_name: Option<&str>,
        content_type: &str,
        body: Bytes,
        unix_millis: i64,
    ) -> Result<String, RepositoryError> {
        if body.is_empty() {
            return Err(RepositoryError::Invalid("video body is empty".to_string()));
        }
        let objects = self.objects()?;
        let settings = self.settings()?;

        let path = kind.object_path(video_extension(file_name), unix_millis);
        let size = body.len();
        let url = objects.upload(&path, body, content_type).await?;
        settings
            .set(kind.setting_key(), &Value::String(url.clone()))
            .await?;

        tracing::info!(%kind, path = %path, size, "video uploaded");
        Ok(url)
    }
}

/// Extension of `file_name`, or [`DEFAULT_VIDEO_EXTENSION`] when it is missing
/// or not plain alphanumeric.
pub fn video_extension(file_name: Option<&str>) -> &str {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(DEFAULT_VIDEO_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SettingsStore;
    use crate::storage::memory::{InMemoryObjectStore, InMemorySettingsStore};
    use serde_json::json;

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<Value>, RepositoryError> {
            Err(RepositoryError::Connection("refused".into()))
        }
        async fn set(&self, _key: &str, _value: &Value) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection("refused".into()))
        }
        async fn list(&self) -> Result<Vec<SettingRow>, RepositoryError> {
            Err(RepositoryError::Connection("refused".into()))
        }
    }

    fn service(store: InMemorySettingsStore) -> (SiteService, Arc<BoxSettingsStore>) {
        let settings = Arc::new(BoxSettingsStore::new(store));
        let objects = Arc::new(BoxObjectStore::new(InMemoryObjectStore::new(
            "https://cdn.example/public/dlh-videos",
        )));
        (SiteService::new(Some(settings.clone()), Some(objects)), settings)
    }

    #[test]
    fn test_video_extension() {
        assert_eq!(video_extension(Some("intro.webm")), "webm");
        assert_eq!(video_extension(Some("a.b.MOV")), "MOV");
        assert_eq!(video_extension(Some("noext")), "mp4");
        assert_eq!(video_extension(Some("trailing.")), "mp4");
        assert_eq!(video_extension(Some("x.mp4/../y")), "mp4");
        assert_eq!(video_extension(None), "mp4");
    }

    #[tokio::test]
    async fn test_load_overlays_rows_on_defaults() {
        let (svc, _) = service(InMemorySettingsStore::with_entries([
            ("site_name", json!("DLH Academy")),
            ("contact_phone", Value::Null),
            ("unrelated", json!("x")),
        ]));
        let site = svc.load().await;
        assert_eq!(site.site_name, "DLH Academy");
        assert_eq!(site.contact_phone, SiteSettings::default().contact_phone);
    }

    #[tokio::test]
    async fn test_load_falls_back_on_store_error() {
        let svc = SiteService::new(Some(Arc::new(BoxSettingsStore::new(BrokenStore))), None);
        assert_eq!(svc.load().await, SiteSettings::default());
        assert!(svc.list_rows().await.is_err());
    }

    #[tokio::test]
    async fn test_save_rejects_empty_key() {
        let (svc, _) = service(InMemorySettingsStore::new());
        let err = svc.save("  ", &json!("v")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_save_site_settings_writes_all_keys() {
        let (svc, store) = service(InMemorySettingsStore::new());
        let mut site = SiteSettings::default();
        site.site_tagline = "Learn anything".to_string();
        svc.save_site_settings(&site).await.unwrap();

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), SiteSettings::KEYS.len());
        assert_eq!(svc.load().await, site);
    }

    #[tokio::test]
    async fn test_upload_video_records_url() {
        let (svc, store) = service(InMemorySettingsStore::new());
        let url = svc
            .upload_video_at(
                VideoKind::Anthem,
                Some("anthem.webm"),
                "video/webm",
                Bytes::from_static(b"\x1a\x45\xdf\xa3"),
                1700000000000,
            )
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://cdn.example/public/dlh-videos/anthem-video-1700000000000.webm"
        );
        assert_eq!(store.get("anthem_video_url").await.unwrap(), Some(json!(url)));
    }

    #[tokio::test]
    async fn test_upload_without_object_store() {
        let svc = SiteService::new(
            Some(Arc::new(BoxSettingsStore::new(InMemorySettingsStore::new()))),
            None,
        );
        let err = svc
            .upload_video(VideoKind::Demo, None, "video/mp4", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotConfigured(_)));
    }
}
