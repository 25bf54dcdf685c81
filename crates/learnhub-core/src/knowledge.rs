//! Best-effort lookup of admin-authored knowledge.
//!
//! Knowledge enriches the system prompt but is never required: a missing
//! store, a failed query or a slow store all degrade to an empty string.

use std::sync::Arc;
use std::time::Duration;

use learnhub_types::error::KnowledgeError;
use learnhub_types::settings::{BOT_KNOWLEDGE_KEY, setting_value_to_string};

use crate::storage::BoxSettingsStore;

/// Reads the `bot_knowledge` setting with a bounded wait.
#[derive(Clone)]
pub struct KnowledgeFetcher {
    store: Option<Arc<BoxSettingsStore>>,
    timeout: Duration,
}

impl KnowledgeFetcher {
    pub fn new(store: Option<Arc<BoxSettingsStore>>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Read the knowledge value, reporting why it could not be read.
    ///
    /// An absent row or a null value is `Ok("")`.
    pub async fn try_fetch(&self) -> Result<String, KnowledgeError> {
        let store = self.store.as_ref().ok_or(KnowledgeError::NotConfigured)?;

        let value = tokio::time::timeout(self.timeout, store.get(BOT_KNOWLEDGE_KEY))
            .await
            .map_err(|_| KnowledgeError::TimedOut(self.timeout))??;

        Ok(value
            .filter(|v| !v.is_null())
            .map(|v| setting_value_to_string(&v))
            .unwrap_or_default())
    }

    /// Read the knowledge value; every failure becomes an empty string.
    pub async fn fetch(&self) -> String {
        match self.try_fetch().await {
            Ok(knowledge) => knowledge,
            Err(KnowledgeError::NotConfigured) => {
                tracing::debug!("settings store not configured, skipping admin knowledge");
                String::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch admin knowledge, continuing without it");
                String::new()
            }
        }
    }
}
