//! Key/value settings store trait.
//!
//! The store is owned by an external service; this crate only reads the
//! admin knowledge and site settings and upserts values on behalf of the
//! admin API.

use std::future::Future;
use std::pin::Pin;

use learnhub_types::error::RepositoryError;
use learnhub_types::settings::SettingRow;
use serde_json::Value;

/// Trait for the admin settings key/value store.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Each key maps to at most one current value; the backing service
/// guarantees that.
pub trait SettingsStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<Value>, RepositoryError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &Value,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// List every row.
    fn list(&self) -> impl Future<Output = Result<Vec<SettingRow>, RepositoryError>> + Send;
}

/// Object-safe version of [`SettingsStore`] with boxed futures.
pub trait SettingsStoreDyn: Send + Sync {
    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, RepositoryError>> + Send + 'a>>;

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<(), RepositoryError>> + Send + 'a>>;

    fn list_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SettingRow>, RepositoryError>> + Send + '_>>;
}

impl<T: SettingsStore> SettingsStoreDyn for T {
    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, RepositoryError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<(), RepositoryError>> + Send + 'a>> {
        Box::pin(self.set(key, value))
    }

    fn list_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SettingRow>, RepositoryError>> + Send + '_>> {
        Box::pin(self.list())
    }
}

/// Type-erased settings store so the concrete backend can be chosen at runtime
/// (the hosted store in production, an in-memory store in tests).
pub struct BoxSettingsStore {
    inner: Box<dyn SettingsStoreDyn + Send + Sync>,
}

impl BoxSettingsStore {
    pub fn new<T: SettingsStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }

    pub async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError> {
        self.inner.get_boxed(key).await
    }

    pub async fn set(&self, key: &str, value: &Value) -> Result<(), RepositoryError> {
        self.inner.set_boxed(key, value).await
    }

    pub async fn list(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        self.inner.list_boxed().await
    }
}
