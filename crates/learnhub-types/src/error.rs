use std::time::Duration;

use thiserror::Error;

/// Errors surfaced to chat proxy callers.
///
/// Every variant maps to one HTTP status and one client-facing message.
/// Upstream detail is kept for logging and never returned to the caller.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not configured: {0}")]
    NotConfigured(String),

    #[error("inference gateway rate limit exceeded")]
    RateLimited,

    #[error("inference gateway quota exceeded")]
    QuotaExceeded,

    #[error("inference gateway error (status {status:?}): {detail}")]
    Upstream { status: Option<u16>, detail: String },
}

impl ProxyError {
    /// The error for a body without a usable `messages` array.
    pub fn messages_required() -> Self {
        ProxyError::InvalidRequest("Messages array is required".to_string())
    }

    /// HTTP status code returned to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::InvalidRequest(_) => 400,
            ProxyError::NotConfigured(_) => 500,
            ProxyError::RateLimited => 429,
            ProxyError::QuotaExceeded => 402,
            ProxyError::Upstream { .. } => 500,
        }
    }

    /// Human-readable message placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            ProxyError::InvalidRequest(msg) => msg.clone(),
            ProxyError::NotConfigured(_) => "AI service is not configured".to_string(),
            ProxyError::RateLimited => {
                "Rate limit exceeded. Please wait a moment and try again.".to_string()
            }
            ProxyError::QuotaExceeded => {
                "AI service quota exceeded. Please try again later.".to_string()
            }
            ProxyError::Upstream { .. } => "Failed to get AI response".to_string(),
        }
    }
}

/// Errors from the inference gateway transport.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-2xx status.
    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway request failed: {0}")]
    Transport(String),

    /// The body stream broke after the response was accepted.
    #[error("gateway stream error: {0}")]
    Stream(String),
}

impl From<GatewayError> for ProxyError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Status { status: 429, .. } => ProxyError::RateLimited,
            GatewayError::Status { status: 402, .. } => ProxyError::QuotaExceeded,
            GatewayError::Status { status, body } => ProxyError::Upstream {
                status: Some(status),
                detail: body,
            },
            GatewayError::Transport(detail) | GatewayError::Stream(detail) => {
                ProxyError::Upstream {
                    status: None,
                    detail,
                }
            }
        }
    }
}

/// Errors from settings-store and object-store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("failed to decode store response: {0}")]
    Decode(String),

    #[error("invalid value: {0}")]
    Invalid(String),

    /// No backend is configured for this store.
    #[error("{0} is not configured")]
    NotConfigured(String),
}

/// Failure to load the admin knowledge text.
///
/// Always recovered where it occurs: the request continues with empty
/// knowledge.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("settings store is not configured")]
    NotConfigured,

    #[error("settings store read timed out after {0:?}")]
    TimedOut(Duration),

    #[error("settings store read failed: {0}")]
    Store(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_error_status_codes() {
        assert_eq!(ProxyError::messages_required().status_code(), 400);
        assert_eq!(ProxyError::NotConfigured("key".into()).status_code(), 500);
        assert_eq!(ProxyError::RateLimited.status_code(), 429);
        assert_eq!(ProxyError::QuotaExceeded.status_code(), 402);
        let upstream = ProxyError::Upstream {
            status: Some(503),
            detail: "down".into(),
        };
        assert_eq!(upstream.status_code(), 500);
    }

    #[test]
    fn test_gateway_status_mapping() {
        let limited: ProxyError = GatewayError::Status {
            status: 429,
            body: "slow down".into(),
        }
        .into();
        assert!(matches!(limited, ProxyError::RateLimited));
        assert!(limited.client_message().contains("Rate limit"));

        let quota: ProxyError = GatewayError::Status {
            status: 402,
            body: "pay".into(),
        }
        .into();
        assert!(matches!(quota, ProxyError::QuotaExceeded));
    }

    #[test]
    fn test_upstream_detail_not_in_client_message() {
        let err: ProxyError = GatewayError::Status {
            status: 500,
            body: "internal stack trace".into(),
        }
        .into();
        assert_eq!(err.client_message(), "Failed to get AI response");
        assert!(err.to_string().contains("internal stack trace"));
    }

    #[test]
    fn test_transport_error_is_upstream() {
        let err: ProxyError = GatewayError::Transport("dns".into()).into();
        assert!(matches!(err, ProxyError::Upstream { status: None, .. }));
    }

    #[test]
    fn test_knowledge_error_display() {
        let err = KnowledgeError::from(RepositoryError::Query("boom".into()));
        assert_eq!(err.to_string(), "settings store read failed: query error: boom");
    }
}
