//! OpenAiCompatGateway -- concrete [`ChatGateway`] for any OpenAI-compatible
//! chat-completions endpoint.
//!
//! The request is a single `POST` with bearer authentication. The response
//! body is handed back as raw bytes; server-sent event framing is left to the
//! browser client.

use futures_util::TryStreamExt;
use secrecy::{ExposeSecret, SecretString};

use learnhub_core::gateway::{ByteStream, ChatGateway};
use learnhub_types::chat::GatewayRequest;
use learnhub_types::error::GatewayError;

/// Client for an OpenAI-compatible streaming endpoint.
///
/// Holds no credential; the key is supplied per call.
#[derive(Debug, Clone)]
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiCompatGateway {
    /// Create a gateway client for `endpoint` (the full chat-completions URL).
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatGateway for OpenAiCompatGateway {
    fn name(&self) -> &str {
        "openai_compat"
    }

    async fn stream_chat(
        &self,
        api_key: &SecretString,
        request: &GatewayRequest,
    ) -> Result<ByteStream, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| GatewayError::Stream(e.to_string()));
        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{CannedResponse, serve_once};
    use futures_util::StreamExt;
    use learnhub_types::chat::ChatMessage;

    fn request() -> GatewayRequest {
        GatewayRequest::streaming(
            "google/gemini-3-flash-preview",
            "You are a tutor.".to_string(),
            vec![ChatMessage::user("hi")],
        )
    }

    #[tokio::test]
    async fn test_streams_body_and_sends_bearer() {
        let sse = "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\ndata: [DONE]\n\n";
        let (base, captured) = serve_once(CannedResponse::ok("text/event-stream", sse)).await;
        let gateway = OpenAiCompatGateway::new(reqwest::Client::new(), format!("{base}/v1/chat/completions"));

        let stream = gateway
            .stream_chat(&SecretString::from("sk-test".to_string()), &request())
            .await
            .unwrap();
        let body: Vec<u8> = stream
            .map(|chunk| chunk.unwrap().to_vec())
            .concat()
            .await;
        assert_eq!(String::from_utf8(body).unwrap(), sse);

        let req = captured.await.unwrap();
        assert_eq!(req.method, reqwest::Method::POST);
        assert_eq!(req.uri, "/v1/chat/completions");
        assert!(req.header("authorization").as_deref() == Some("Bearer sk-test"));
        let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(sent["stream"], true);
        assert_eq!(sent["messages"][0]["role"], "system");
        assert_eq!(sent["messages"][1]["content"], "hi");
    }

    #[tokio::test]
    async fn test_non_success_status_carries_body() {
        let (base, _captured) =
            serve_once(CannedResponse::status(429, "application/json", "{\"error\":\"slow down\"}")).await;
        let gateway = OpenAiCompatGateway::new(reqwest::Client::new(), base);

        let err = gateway
            .stream_chat(&SecretString::from("k".to_string()), &request())
            .await
            .err()
            .unwrap();
        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("slow down"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let gateway = OpenAiCompatGateway::new(reqwest::Client::new(), "http://127.0.0.1:1/v1");
        let err = gateway
            .stream_chat(&SecretString::from("k".to_string()), &request())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
