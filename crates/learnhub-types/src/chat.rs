//! Chat types: the caller's conversation history and the upstream payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ProxyError;

/// Role of a message in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A validated request to the chat proxy.
///
/// The caller supplies the whole history on every request; nothing is kept
/// between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub course_id: Option<String>,
}

impl ChatRequest {
    /// Parse and validate a raw request body.
    ///
    /// The body must be a JSON object whose `messages` field is a non-empty
    /// array of `{role, content}` objects. `courseId` is optional; a value
    /// that is not a string is treated as absent.
    pub fn from_json_bytes(body: &[u8]) -> Result<Self, ProxyError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            ProxyError::InvalidRequest(format!("Request body must be valid JSON: {e}"))
        })?;
        Self::from_json_value(value)
    }

    /// Validate an already-decoded JSON body. See [`ChatRequest::from_json_bytes`].
    pub fn from_json_value(value: Value) -> Result<Self, ProxyError> {
        let Value::Object(mut body) = value else {
            return Err(ProxyError::messages_required());
        };

        let items = match body.remove("messages") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(ProxyError::messages_required()),
        };

        let messages = items
            .into_iter()
            .map(serde_json::from_value::<ChatMessage>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ProxyError::InvalidRequest(format!("Invalid chat message: {e}")))?;

        let course_id = match body.remove("courseId") {
            Some(Value::String(id)) => Some(id),
            _ => None,
        };

        Ok(Self {
            messages,
            course_id,
        })
    }
}

/// Payload sent to the inference gateway's chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl GatewayRequest {
    /// Build a streaming request with `system_prompt` prepended to `history`.
    pub fn streaming(model: impl Into<String>, system_prompt: String, history: Vec<ChatMessage>) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend(history);

        Self {
            model: model.into(),
            messages,
            stream: true,
        }
    }
}
