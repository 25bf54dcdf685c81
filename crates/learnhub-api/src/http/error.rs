//! Application error type mapping to HTTP status codes.
//!
//! Every error body is `{"error": "<message>"}`. Upstream and store detail
//! stays in the logs.

use axum::Json;
use axum::extract::rejection::{BytesRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use learnhub_types::error::{ProxyError, RepositoryError};

#[derive(Debug)]
pub enum AppError {
    /// Chat proxy failures.
    Proxy(ProxyError),
    /// Settings or object store failures.
    Store(RepositoryError),
    /// Authentication failure.
    Unauthorized(String),
    /// Validation error.
    Validation(String),
    /// Extractor rejection, keeping the extractor's status.
    Rejected { status: StatusCode, message: String },
}

impl From<ProxyError> for AppError {
    fn from(e: ProxyError) -> Self {
        AppError::Proxy(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Store(e)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Proxy(e) => (
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.client_message(),
            ),
            AppError::Store(RepositoryError::Invalid(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Store(e @ RepositoryError::NotConfigured(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "settings store request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Settings store request failed".to_string(),
                )
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Rejected { status, message } => (*status, message.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
