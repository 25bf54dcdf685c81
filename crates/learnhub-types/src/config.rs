//! Configuration file types.
//!
//! `FileConfig` is the optional `learnhub.toml`. Every field has a default, so
//! an empty or missing file yields a working configuration. Secrets are never
//! read from this file; they come from the environment.

use serde::{Deserialize, Serialize};

/// Default inference gateway chat-completions endpoint.
pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default model identifier sent to the gateway.
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-3-flash-preview";

/// Default bound on the admin-knowledge read.
pub const DEFAULT_KNOWLEDGE_TIMEOUT_MS: u64 = 3_000;

/// Default object-storage bucket for landing-page videos.
pub const DEFAULT_VIDEO_BUCKET: &str = "dlh-videos";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub gateway: GatewaySection,
    #[serde(default)]
    pub knowledge: KnowledgeSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_endpoint() -> String {
    DEFAULT_GATEWAY_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_GATEWAY_MODEL.to_string()
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSection {
    /// Upper bound on the settings-store read, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_KNOWLEDGE_TIMEOUT_MS
}

impl Default for KnowledgeSection {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_bucket")]
    pub video_bucket: String,
}

fn default_bucket() -> String {
    DEFAULT_VIDEO_BUCKET.to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            video_bucket: default_bucket(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.gateway.model, DEFAULT_GATEWAY_MODEL);
        assert_eq!(config.gateway.endpoint, DEFAULT_GATEWAY_ENDPOINT);
        assert_eq!(config.knowledge.timeout_ms, 3_000);
        assert_eq!(config.storage.video_bucket, "dlh-videos");
    }

    #[test]
    fn test_partial_sections() {
        let config: FileConfig = toml::from_str(
            r#"
[gateway]
model = "openai/gpt-5-mini"

[knowledge]
timeout_ms = 750
"#,
        )
        .unwrap();
        assert_eq!(config.gateway.model, "openai/gpt-5-mini");
        assert_eq!(config.gateway.endpoint, DEFAULT_GATEWAY_ENDPOINT);
        assert_eq!(config.knowledge.timeout_ms, 750);
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
