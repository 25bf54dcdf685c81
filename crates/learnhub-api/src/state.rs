//! Application state wiring all services together.
//!
//! AppState holds the service instances used by both CLI commands and the
//! HTTP handlers, pinned to the Supabase and gateway clients from infra.

use std::sync::Arc;

use learnhub_core::chat::ChatProxyService;
use learnhub_core::gateway::BoxChatGateway;
use learnhub_core::site::SiteService;
use learnhub_core::storage::{BoxObjectStore, BoxSettingsStore};
use learnhub_infra::config::AppConfig;
use learnhub_infra::gateway::OpenAiCompatGateway;
use learnhub_infra::supabase::{SupabaseObjectStore, SupabaseSettingsStore};
use secrecy::SecretString;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatProxyService>,
    pub site: Arc<SiteService>,
    /// Bearer token guarding the admin routes; `None` closes them.
    pub admin_token: Option<Arc<SecretString>>,
}

impl AppState {
    /// Wire the services from a resolved configuration.
    ///
    /// Missing credentials are not an error here: the gateway key is checked
    /// per request and an absent settings store degrades to defaults.
    pub fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let client = learnhub_infra::http_client()?;

        if config.gateway_api_key.is_none() {
            tracing::warn!("AI_GATEWAY_API_KEY is not set, chat requests will be rejected");
        }

        let (settings, objects) = match &config.supabase {
            Some(supabase) => {
                let settings = SupabaseSettingsStore::new(client.clone(), supabase.clone());
                let objects = SupabaseObjectStore::new(
                    client.clone(),
                    supabase.clone(),
                    config.video_bucket.clone(),
                );
                (
                    Some(Arc::new(BoxSettingsStore::new(settings))),
                    Some(Arc::new(BoxObjectStore::new(objects))),
                )
            }
            None => {
                tracing::info!("Supabase is not configured, using default settings and no admin knowledge");
                (None, None)
            }
        };

        let gateway = OpenAiCompatGateway::new(client, config.gateway_endpoint.clone());
        let chat = ChatProxyService::new(
            config.proxy_config(),
            Arc::new(BoxChatGateway::new(gateway)),
            settings.clone(),
        );
        let site = SiteService::new(settings, objects);

        Ok(Self::from_parts(
            chat,
            site,
            config.admin_token.clone(),
        ))
    }

    /// Assemble state from already-built services.
    pub fn from_parts(
        chat: ChatProxyService,
        site: SiteService,
        admin_token: Option<SecretString>,
    ) -> Self {
        Self {
            chat: Arc::new(chat),
            site: Arc::new(site),
            admin_token: admin_token.map(Arc::new),
        }
    }
}
