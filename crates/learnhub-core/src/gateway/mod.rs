//! Inference gateway abstraction.
//!
//! The gateway speaks an OpenAI-compatible chat-completions protocol. The
//! proxy never parses the streamed body; it is handed back as raw bytes.

pub mod box_gateway;

pub use box_gateway::BoxChatGateway;

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use learnhub_types::chat::GatewayRequest;
use learnhub_types::error::GatewayError;
use secrecy::SecretString;

/// Raw response body of a streaming completion, chunk by chunk, unmodified.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, GatewayError>> + Send + 'static>>;

/// Core trait for the upstream inference gateway.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Not object-safe; use [`BoxChatGateway`] for dynamic dispatch.
pub trait ChatGateway: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Send a streaming completion request.
    ///
    /// Resolves once the gateway has answered with a status line. A non-2xx
    /// status becomes [`GatewayError::Status`]; a 2xx response yields its
    /// body as a byte stream.
    fn stream_chat(
        &self,
        api_key: &SecretString,
        request: &GatewayRequest,
    ) -> impl Future<Output = Result<ByteStream, GatewayError>> + Send;
}
