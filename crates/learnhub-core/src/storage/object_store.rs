//! Object store trait for publicly served uploads.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use learnhub_types::error::RepositoryError;

/// Trait for an object store that serves uploads at a public URL.
pub trait ObjectStore: Send + Sync {
    /// Upload `body` to `path`, replacing any existing object, and return
    /// the object's public URL.
    fn upload(
        &self,
        path: &str,
        body: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<String, RepositoryError>> + Send;
}

/// Object-safe version of [`ObjectStore`].
pub trait ObjectStoreDyn: Send + Sync {
    fn upload_boxed<'a>(
        &'a self,
        path: &'a str,
        body: Bytes,
        content_type: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, RepositoryError>> + Send + 'a>>;
}

impl<T: ObjectStore> ObjectStoreDyn for T {
    fn upload_boxed<'a>(
        &'a self,
        path: &'a str,
        body: Bytes,
        content_type: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, RepositoryError>> + Send + 'a>> {
        Box::pin(self.upload(path, body, content_type))
    }
}

/// Type-erased object store.
pub struct BoxObjectStore {
    inner: Box<dyn ObjectStoreDyn + Send + Sync>,
}

impl BoxObjectStore {
    pub fn new<T: ObjectStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }

    pub async fn upload(
        &self,
        path: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<String, RepositoryError> {
        self.inner.upload_boxed(path, body, content_type).await
    }
}
