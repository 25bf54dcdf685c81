//! Loopback axum app for exercising the reqwest clients in tests.
//!
//! Every request gets the same canned reply; the first one is recorded.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};

/// The request the server received.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    /// Path and query, e.g. `/rest/v1/admin_settings?key=eq.x`.
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    /// Value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    pub fn ok(content_type: &'static str, body: impl Into<String>) -> Self {
        Self::status(200, content_type, body)
    }

    pub fn status(status: u16, content_type: &'static str, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("canned status must be valid"),
            content_type,
            body: body.into(),
        }
    }
}

/// Serve `response` on an ephemeral port and report the first request.
/// Returns the server's base URL (`http://127.0.0.1:{port}`).
pub async fn serve_once(response: CannedResponse) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    let (tx, rx) = oneshot::channel();
    let tx = Arc::new(Mutex::new(Some(tx)));

    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
            let tx = Arc::clone(&tx);
            let response = response.clone();
            async move {
                if let Some(tx) = tx.lock().await.take() {
                    let uri = uri
                        .path_and_query()
                        .map(|pq| pq.as_str().to_string())
                        .unwrap_or_else(|| uri.path().to_string());
                    let _ = tx.send(CapturedRequest {
                        method,
                        uri,
                        headers,
                        body: String::from_utf8_lossy(&body).into_owned(),
                    });
                }
                (
                    response.status,
                    [(header::CONTENT_TYPE, response.content_type)],
                    response.body,
                )
            }
        },
    );

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::warn!(error = %e, "test server stopped");
        }
    });

    (format!("http://{addr}"), rx)
}
