//! Configuration loader for the Learning Hub.
//!
//! Reads the optional `learnhub.toml` into [`FileConfig`] and overlays
//! environment variables to produce the resolved [`AppConfig`]. Secrets only
//! ever come from the environment.

use std::path::Path;
use std::time::Duration;

use learnhub_core::chat::ProxyConfig;
use learnhub_types::config::{FileConfig, ServerSection};
use secrecy::SecretString;

use crate::supabase::SupabaseConfig;

pub const ENV_GATEWAY_API_KEY: &str = "AI_GATEWAY_API_KEY";
pub const ENV_GATEWAY_URL: &str = "AI_GATEWAY_URL";
pub const ENV_GATEWAY_MODEL: &str = "AI_GATEWAY_MODEL";
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const ENV_KNOWLEDGE_TIMEOUT_MS: &str = "LEARNHUB_KNOWLEDGE_TIMEOUT_MS";
pub const ENV_ADMIN_TOKEN: &str = "LEARNHUB_ADMIN_TOKEN";
pub const ENV_VIDEO_BUCKET: &str = "LEARNHUB_VIDEO_BUCKET";

/// Load the configuration file at `path`.
///
/// - If the file does not exist, returns [`FileConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_file_config(path: &Path) -> FileConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return FileConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return FileConfig::default();
        }
    };

    match toml::from_str::<FileConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            FileConfig::default()
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSection,
    pub gateway_endpoint: String,
    pub gateway_model: String,
    /// Missing key is allowed; chat requests then fail as not configured.
    pub gateway_api_key: Option<SecretString>,
    /// Present only when both the project URL and service key are set.
    pub supabase: Option<SupabaseConfig>,
    pub knowledge_timeout: Duration,
    pub video_bucket: String,
    /// Bearer token for the admin routes. Admin routes are closed without it.
    pub admin_token: Option<SecretString>,
}

impl AppConfig {
    /// Overlay environment values from `env` onto `file`.
    ///
    /// Empty variables count as unset.
    pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| env(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let knowledge_timeout_ms = match var(ENV_KNOWLEDGE_TIMEOUT_MS) {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "{ENV_KNOWLEDGE_TIMEOUT_MS} is not a number, using {}",
                    file.knowledge.timeout_ms
                );
                file.knowledge.timeout_ms
            }),
            None => file.knowledge.timeout_ms,
        };

        let supabase = match (var(ENV_SUPABASE_URL), var(ENV_SUPABASE_SERVICE_ROLE_KEY)) {
            (Some(url), Some(key)) => Some(SupabaseConfig::new(url, SecretString::from(key))),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "{ENV_SUPABASE_URL} and {ENV_SUPABASE_SERVICE_ROLE_KEY} must both be set, settings store disabled"
                );
                None
            }
            (None, None) => None,
        };

        Self {
            server: file.server,
            gateway_endpoint: var(ENV_GATEWAY_URL).unwrap_or(file.gateway.endpoint),
            gateway_model: var(ENV_GATEWAY_MODEL).unwrap_or(file.gateway.model),
            gateway_api_key: var(ENV_GATEWAY_API_KEY).map(SecretString::from),
            supabase,
            knowledge_timeout: Duration::from_millis(knowledge_timeout_ms),
            video_bucket: var(ENV_VIDEO_BUCKET).unwrap_or(file.storage.video_bucket),
            admin_token: var(ENV_ADMIN_TOKEN).map(SecretString::from),
        }
    }

    /// [`AppConfig::resolve`] against the process environment.
    pub fn from_env(file: FileConfig) -> Self {
        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// The settings the chat proxy needs.
    pub fn proxy_config(&self) -> ProxyConfig {
        ProxyConfig {
            api_key: self.gateway_api_key.clone(),
            model: self.gateway_model.clone(),
            knowledge_timeout: self.knowledge_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_types::config::{DEFAULT_GATEWAY_ENDPOINT, DEFAULT_GATEWAY_MODEL};
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[tokio::test]
    async fn load_file_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_file_config(&tmp.path().join("learnhub.toml")).await;
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.gateway.model, DEFAULT_GATEWAY_MODEL);
    }

    #[tokio::test]
    async fn load_file_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("learnhub.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 9000

[storage]
video_bucket = "hub-media"
"#,
        )
        .await
        .unwrap();

        let config = load_file_config(&path).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.video_bucket, "hub-media");
    }

    #[tokio::test]
    async fn load_file_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("learnhub.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_file_config(&path).await;
        assert_eq!(config.server.port, 8787);
    }

    #[test]
    fn resolve_without_env_uses_file_values() {
        let config = AppConfig::resolve(FileConfig::default(), env_of(&[]));
        assert_eq!(config.gateway_endpoint, DEFAULT_GATEWAY_ENDPOINT);
        assert_eq!(config.gateway_model, DEFAULT_GATEWAY_MODEL);
        assert!(config.gateway_api_key.is_none());
        assert!(config.supabase.is_none());
        assert!(config.admin_token.is_none());
        assert_eq!(config.knowledge_timeout, Duration::from_millis(3_000));
        assert_eq!(config.video_bucket, "dlh-videos");
    }

    #[test]
    fn resolve_env_overrides() {
        let config = AppConfig::resolve(
            FileConfig::default(),
            env_of(&[
                (ENV_GATEWAY_API_KEY, "gw-key"),
                (ENV_GATEWAY_URL, "http://localhost:9999/v1/chat/completions"),
                (ENV_GATEWAY_MODEL, "openai/gpt-5-mini"),
                (ENV_SUPABASE_URL, "https://abc.supabase.co"),
                (ENV_SUPABASE_SERVICE_ROLE_KEY, "srv"),
                (ENV_KNOWLEDGE_TIMEOUT_MS, "250"),
                (ENV_ADMIN_TOKEN, "admin"),
            ]),
        );
        assert_eq!(config.gateway_api_key.unwrap().expose_secret(), "gw-key");
        assert_eq!(config.gateway_endpoint, "http://localhost:9999/v1/chat/completions");
        assert_eq!(config.gateway_model, "openai/gpt-5-mini");
        assert_eq!(config.supabase.unwrap().url(), "https://abc.supabase.co");
        assert_eq!(config.knowledge_timeout, Duration::from_millis(250));
        assert_eq!(config.admin_token.unwrap().expose_secret(), "admin");
    }

    #[test]
    fn resolve_blank_key_is_unset() {
        let config = AppConfig::resolve(FileConfig::default(), env_of(&[(ENV_GATEWAY_API_KEY, "  ")]));
        assert!(config.gateway_api_key.is_none());
        assert!(config.proxy_config().api_key.is_none());
    }

    #[test]
    fn resolve_half_supabase_config_is_disabled() {
        let config = AppConfig::resolve(
            FileConfig::default(),
            env_of(&[(ENV_SUPABASE_URL, "https://abc.supabase.co")]),
        );
        assert!(config.supabase.is_none());
    }

    #[test]
    fn resolve_bad_timeout_keeps_file_value() {
        let mut file = FileConfig::default();
        file.knowledge.timeout_ms = 1_200;
        let config = AppConfig::resolve(file, env_of(&[(ENV_KNOWLEDGE_TIMEOUT_MS, "soon")]));
        assert_eq!(config.knowledge_timeout, Duration::from_millis(1_200));
    }
}
