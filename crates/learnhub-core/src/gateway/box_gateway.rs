//! Type-erased wrapper around [`ChatGateway`].

use std::future::Future;
use std::pin::Pin;

use learnhub_types::chat::GatewayRequest;
use learnhub_types::error::GatewayError;
use secrecy::SecretString;

use super::{ByteStream, ChatGateway};

/// Object-safe version of [`ChatGateway`] with boxed futures.
///
/// Blanket-implemented for every `ChatGateway`.
pub trait ChatGatewayDyn: Send + Sync {
    fn name(&self) -> &str;

    fn stream_chat_boxed<'a>(
        &'a self,
        api_key: &'a SecretString,
        request: &'a GatewayRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ByteStream, GatewayError>> + Send + 'a>>;
}

impl<T: ChatGateway> ChatGatewayDyn for T {
    fn name(&self) -> &str {
        ChatGateway::name(self)
    }

    fn stream_chat_boxed<'a>(
        &'a self,
        api_key: &'a SecretString,
        request: &'a GatewayRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ByteStream, GatewayError>> + Send + 'a>> {
        Box::pin(self.stream_chat(api_key, request))
    }
}

/// Dynamic gateway held by the chat proxy service.
pub struct BoxChatGateway {
    inner: Box<dyn ChatGatewayDyn + Send + Sync>,
}

impl BoxChatGateway {
    pub fn new<T: ChatGateway + 'static>(gateway: T) -> Self {
        Self {
            inner: Box::new(gateway),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn stream_chat(
        &self,
        api_key: &SecretString,
        request: &GatewayRequest,
    ) -> Result<ByteStream, GatewayError> {
        self.inner.stream_chat_boxed(api_key, request).await
    }
}
