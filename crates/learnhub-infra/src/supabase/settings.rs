//! `admin_settings` table over PostgREST.

use serde_json::{Value, json};

use learnhub_core::storage::SettingsStore;
use learnhub_types::error::RepositoryError;
use learnhub_types::settings::SettingRow;

use super::{SupabaseConfig, send};

/// Name of the key/value settings table.
pub const SETTINGS_TABLE: &str = "admin_settings";

/// [`SettingsStore`] backed by the Supabase `admin_settings` table.
#[derive(Debug, Clone)]
pub struct SupabaseSettingsStore {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseSettingsStore {
    pub fn new(client: reqwest::Client, config: SupabaseConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{SETTINGS_TABLE}", self.config.url())
    }

    async fn rows(&self, query: &[(&str, String)]) -> Result<Vec<SettingRow>, RepositoryError> {
        let builder = self.config.authorize(self.client.get(self.table_url()).query(query));
        send(builder)
            .await?
            .json::<Vec<SettingRow>>()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))
    }
}

impl SettingsStore for SupabaseSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError> {
        let rows = self
            .rows(&[
                ("select", "key,value".to_string()),
                ("key", format!("eq.{key}")),
                ("limit", "1".to_string()),
            ])
            .await?;
        Ok(rows.into_iter().next().and_then(|row| row.value))
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), RepositoryError> {
        let row = json!([{
            "key": key,
            "value": value,
            "updated_at": chrono::Utc::now(),
        }]);
        let builder = self.config.authorize(
            self.client
                .post(self.table_url())
                .query(&[("on_conflict", "key")])
                .header("Prefer", "resolution=merge-duplicates,return=minimal")
                .json(&row),
        );
        send(builder).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        self.rows(&[
            ("select", "key,value,updated_at".to_string()),
            ("order", "key.asc".to_string()),
        ])
        .await
    }
}
