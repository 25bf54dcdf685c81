//! Streaming chat proxy endpoint.
//!
//! POST /api/v1/chat
//!
//! Body: `{"messages": [{"role", "content"}, ...], "courseId"?: string}`.
//! On success the gateway's event stream is relayed byte for byte; on
//! failure the body is `{"error": "..."}` with the mapped status.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures_util::TryStreamExt;
use tracing::{Instrument, Span};

use learnhub_observe::genai_attrs;
use learnhub_types::chat::ChatRequest;

use crate::http::error::AppError;
use crate::state::AppState;

/// Largest accepted chat body. Long conversation histories are forwarded
/// whole, so this sits well above axum's 2 MB default.
pub const MAX_CHAT_BYTES: usize = 16 * 1024 * 1024;

/// Span wrapping one gateway call, with the GenAI attributes in
/// [`genai_attrs`].
pub fn chat_span(provider: &str, model: &str, message_count: usize) -> Span {
    tracing::info_span!(
        "chat",
        gen_ai.operation.name = genai_attrs::OP_CHAT,
        gen_ai.provider.name = provider,
        gen_ai.request.model = model,
        gen_ai.request.message_count = message_count,
    )
}

/// POST /api/v1/chat -- relay one chat turn as a server-sent event stream.
///
/// The body is parsed by hand so malformed JSON is a 400 with the usual
/// error envelope rather than the extractor's own rejection. Buffering
/// failures such as an oversize body keep their status.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let request = ChatRequest::from_json_bytes(&body?)?;

    let span = chat_span(
        state.chat.gateway_name(),
        state.chat.model(),
        request.messages.len(),
    );
    let stream = state.chat.handle(request).instrument(span).await?;

    let stream = stream.inspect_err(|e| {
        tracing::warn!(error = %e, "inference gateway stream ended with an error");
    });

    Ok((
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_span_carries_genai_fields() {
        let subscriber = tracing_subscriber::registry();
        let _guard = tracing::subscriber::set_default(subscriber);

        let span = chat_span("openai-compatible", "google/gemini-2.5-flash", 3);
        let metadata = span.metadata().expect("span metadata");
        assert_eq!(metadata.name(), genai_attrs::OP_CHAT);

        let fields = metadata.fields();
        for name in [
            genai_attrs::GEN_AI_OPERATION_NAME,
            genai_attrs::GEN_AI_PROVIDER_NAME,
            genai_attrs::GEN_AI_REQUEST_MODEL,
            genai_attrs::GEN_AI_REQUEST_MESSAGE_COUNT,
        ] {
            assert!(fields.field(name).is_some(), "chat span lacks {name}");
        }
        assert_eq!(fields.len(), 4);
    }
}
