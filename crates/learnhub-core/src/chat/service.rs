//! Chat proxy service.
//!
//! One request in, one gateway call out. The service owns no conversation
//! state; every request carries its full history.

use std::sync::Arc;
use std::time::Duration;

use learnhub_types::chat::{ChatRequest, GatewayRequest};
use learnhub_types::config::{DEFAULT_GATEWAY_MODEL, DEFAULT_KNOWLEDGE_TIMEOUT_MS};
use learnhub_types::error::ProxyError;
use secrecy::SecretString;
use tracing::{error, info};

use crate::gateway::{BoxChatGateway, ByteStream};
use crate::knowledge::KnowledgeFetcher;
use crate::prompt::{Persona, SystemPromptBuilder};
use crate::storage::BoxSettingsStore;

/// Resolved settings the proxy needs per request.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Gateway credential. `None` means the proxy answers every chat with
    /// a not-configured error without calling the gateway.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub knowledge_timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GATEWAY_MODEL.to_string(),
            knowledge_timeout: Duration::from_millis(DEFAULT_KNOWLEDGE_TIMEOUT_MS),
        }
    }
}

pub struct ChatProxyService {
    config: ProxyConfig,
    persona: Persona,
    gateway: Arc<BoxChatGateway>,
    knowledge: KnowledgeFetcher,
}

impl ChatProxyService {
    pub fn new(
        config: ProxyConfig,
        gateway: Arc<BoxChatGateway>,
        settings: Option<Arc<BoxSettingsStore>>,
    ) -> Self {
        let knowledge = KnowledgeFetcher::new(settings, config.knowledge_timeout);
        Self {
            config,
            persona: Persona::learning_hub(),
            gateway,
            knowledge,
        }
    }

    /// Replace the base persona.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Compose the system prompt for `course_id`, reading admin knowledge
    /// best-effort.
    pub async fn compose_for(&self, course_id: Option<&str>) -> String {
        let knowledge = self.knowledge.fetch().await;
        SystemPromptBuilder::build(&self.persona, &knowledge, course_id)
    }

    /// Run one chat turn and return the gateway's streamed body.
    ///
    /// The credential is checked before the settings store is touched, so an
    /// unconfigured deployment never queries the store or the gateway.
    #[tracing::instrument(skip_all, fields(course_id = request.course_id.as_deref().unwrap_or("")))]
    pub async fn handle(&self, request: ChatRequest) -> Result<ByteStream, ProxyError> {
        if request.messages.is_empty() {
            return Err(ProxyError::messages_required());
        }

        let Some(api_key) = self.config.api_key.as_ref() else {
            error!("inference gateway API key is not configured");
            return Err(ProxyError::NotConfigured(
                "inference gateway API key".to_string(),
            ));
        };

        let system_prompt = self.compose_for(request.course_id.as_deref()).await;
        let payload = GatewayRequest::streaming(&self.config.model, system_prompt, request.messages);

        info!(
            gateway = self.gateway.name(),
            model = %payload.model,
            messages = payload.messages.len() - 1,
            "calling inference gateway"
        );

        match self.gateway.stream_chat(api_key, &payload).await {
            Ok(stream) => {
                info!("streaming response from inference gateway");
                Ok(stream)
            }
            Err(e) => {
                error!(error = %e, "inference gateway error");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bytes::Bytes;
    use futures_util::{StreamExt, stream};
    use learnhub_types::chat::{ChatMessage, MessageRole};
    use learnhub_types::error::{GatewayError, RepositoryError};
    use learnhub_types::settings::{BOT_KNOWLEDGE_KEY, SettingRow};
    use serde_json::{Value, json};

    use crate::gateway::ChatGateway;
    use crate::prompt::builder::{ADMIN_KNOWLEDGE_HEADER, COURSE_INSTRUCTIONS_HEADER};
    use crate::storage::SettingsStore;
    use crate::storage::memory::InMemorySettingsStore;

    /// Gateway that records requests and replays a fixed outcome.
    struct RecordingGateway {
        calls: Arc<AtomicUsize>,
        last: Arc<Mutex<Option<GatewayRequest>>>,
        status: Option<u16>,
        chunks: Vec<&'static str>,
    }

    impl ChatGateway for RecordingGateway {
        fn name(&self) -> &str {
            "recording"
        }

        async fn stream_chat(
            &self,
            _api_key: &SecretString,
            request: &GatewayRequest,
        ) -> Result<ByteStream, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if let Some(status) = self.status {
                return Err(GatewayError::Status {
                    status,
                    body: "upstream secret detail".to_string(),
                });
            }
            let chunks: Vec<Result<Bytes, GatewayError>> = self
                .chunks
                .iter()
                .map(|c| Ok(Bytes::from_static(c.as_bytes())))
                .collect();
            Ok(Box::pin(stream::iter(chunks)))
        }
    }

    /// Store that counts reads.
    struct CountingStore {
        reads: Arc<AtomicUsize>,
        inner: InMemorySettingsStore,
    }

    impl SettingsStore for CountingStore {
        async fn get(&self, key: &str) -> Result<Option<Value>, RepositoryError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key).await
        }
        async fn set(&self, key: &str, value: &Value) -> Result<(), RepositoryError> {
            self.inner.set(key, value).await
        }
        async fn list(&self) -> Result<Vec<SettingRow>, RepositoryError> {
            self.inner.list().await
        }
    }

    struct Harness {
        service: ChatProxyService,
        gateway_calls: Arc<AtomicUsize>,
        store_reads: Arc<AtomicUsize>,
        last: Arc<Mutex<Option<GatewayRequest>>>,
    }

    fn harness(
        api_key: Option<&str>,
        status: Option<u16>,
        chunks: Vec<&'static str>,
        knowledge: Option<Value>,
    ) -> Harness {
        let gateway_calls = Arc::new(AtomicUsize::new(0));
        let store_reads = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));

        let gateway = RecordingGateway {
            calls: gateway_calls.clone(),
            last: last.clone(),
            status,
            chunks,
        };
        let inner = match knowledge {
            Some(v) => InMemorySettingsStore::with_entries([(BOT_KNOWLEDGE_KEY, v)]),
            None => InMemorySettingsStore::new(),
        };
        let store = CountingStore {
            reads: store_reads.clone(),
            inner,
        };

        let config = ProxyConfig {
            api_key: api_key.map(|k| SecretString::from(k.to_string())),
            model: "test/model".to_string(),
            knowledge_timeout: Duration::from_millis(200),
        };
        let service = ChatProxyService::new(
            config,
            Arc::new(BoxChatGateway::new(gateway)),
            Some(Arc::new(BoxSettingsStore::new(store))),
        );

        Harness {
            service,
            gateway_calls,
            store_reads,
            last,
        }
    }

    fn request(course_id: Option<&str>) -> ChatRequest {
        ChatRequest {
            messages: vec![
                ChatMessage::user("What is Excel?"),
                ChatMessage::assistant("A spreadsheet."),
                ChatMessage::user("Show me VLOOKUP"),
            ],
            course_id: course_id.map(String::from),
        }
    }

    async fn collect(stream: ByteStream) -> Vec<Bytes> {
        stream.map(|c| c.unwrap()).collect().await
    }

    #[tokio::test]
    async fn test_forwards_history_with_system_prompt_first() {
        let h = harness(Some("key"), None, vec!["data: a\n\n"], None);
        let original = request(None);
        h.service.handle(original.clone()).await.unwrap();

        assert_eq!(h.gateway_calls.load(Ordering::SeqCst), 1);
        let sent = h.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.model, "test/model");
        assert!(sent.stream);
        assert_eq!(sent.messages.len(), original.messages.len() + 1);
        assert_eq!(sent.messages[0].role, MessageRole::System);
        assert_eq!(&sent.messages[1..], original.messages.as_slice());
    }

    #[tokio::test]
    async fn test_stream_chunks_relayed_unmodified() {
        let chunks = vec!["data: {\"a\":1}\n\n", "data: {\"b\":", "2}\n\n", "data: [DONE]\n\n"];
        let h = harness(Some("key"), None, chunks.clone(), None);
        let stream = h.service.handle(request(None)).await.unwrap();

        let got = collect(stream).await;
        let got: Vec<&[u8]> = got.iter().map(|b| b.as_ref()).collect();
        let want: Vec<&[u8]> = chunks.iter().map(|c| c.as_bytes()).collect();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn test_missing_key_skips_store_and_gateway() {
        let h = harness(None, None, vec![], Some(json!("kb")));
        let err = h.service.handle(request(Some("ms-excel"))).await.err().unwrap();

        assert!(matches!(err, ProxyError::NotConfigured(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(h.gateway_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.store_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_messages_rejected_before_any_call() {
        let h = harness(Some("key"), None, vec![], None);
        let err = h
            .service
            .handle(ChatRequest {
                messages: vec![],
                course_id: None,
            })
            .await
            .err()
            .unwrap();

        assert_eq!(err.status_code(), 400);
        assert_eq!(h.gateway_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.store_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_status_mapping() {
        for (status, want) in [(429, 429), (402, 402), (503, 500), (400, 500)] {
            let h = harness(Some("key"), Some(status), vec![], None);
            let err = h.service.handle(request(None)).await.err().unwrap();
            assert_eq!(err.status_code(), want, "upstream {status}");
            assert!(!err.client_message().contains("upstream secret detail"));
        }
    }

    #[tokio::test]
    async fn test_knowledge_and_course_in_prompt() {
        let h = harness(Some("key"), None, vec![], Some(json!("Office hours: Mon.")));
        h.service.handle(request(Some("ms-excel"))).await.unwrap();

        let prompt = h.last.lock().unwrap().clone().unwrap().messages[0].content.clone();
        let knowledge_at = prompt.find(ADMIN_KNOWLEDGE_HEADER).unwrap();
        let course_at = prompt.find(COURSE_INSTRUCTIONS_HEADER).unwrap();
        assert!(knowledge_at < course_at);
        assert!(prompt.contains("Office hours: Mon."));
        assert_eq!(h.store_reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_course_and_no_knowledge_is_base_persona() {
        let h = harness(Some("key"), None, vec![], None);
        h.service
            .handle(request(Some("no-such-course")))
            .await
            .unwrap();

        let prompt = h.last.lock().unwrap().clone().unwrap().messages[0].content.clone();
        assert_eq!(prompt, Persona::learning_hub().render());
    }

    #[tokio::test]
    async fn test_unconfigured_store_still_calls_gateway() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = RecordingGateway {
            calls: calls.clone(),
            last: Arc::new(Mutex::new(None)),
            status: None,
            chunks: vec![],
        };
        let config = ProxyConfig {
            api_key: Some(SecretString::from("key".to_string())),
            ..ProxyConfig::default()
        };
        let service = ChatProxyService::new(config, Arc::new(BoxChatGateway::new(gateway)), None);

        service.handle(request(None)).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
