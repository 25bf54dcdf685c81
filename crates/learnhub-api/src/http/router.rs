//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/` except `/health`.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderName;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Request headers browsers may send cross-origin. Matches what the Supabase
/// JS client attaches.
pub const ALLOWED_HEADERS: [&str; 8] = [
    "authorization",
    "x-client-info",
    "apikey",
    "content-type",
    "x-supabase-client-platform",
    "x-supabase-client-platform-version",
    "x-supabase-client-runtime",
    "x-supabase-client-runtime-version",
];

/// Permissive CORS: any origin and method, the fixed header allow-list.
///
/// Answers every `OPTIONS` request itself with a 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
}

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chat proxy
        .route(
            "/chat",
            post(handlers::chat::chat).layer(DefaultBodyLimit::max(handlers::chat::MAX_CHAT_BYTES)),
        )
        // Public landing-page data
        .route("/site-settings", get(handlers::site::get_site_settings))
        .route("/courses", get(handlers::site::list_courses))
        // Admin
        .route(
            "/admin/settings",
            get(handlers::admin::list_settings).put(handlers::admin::put_site_settings),
        )
        .route("/admin/settings/{key}", put(handlers::admin::put_setting))
        .route(
            "/admin/videos/{kind}",
            post(handlers::admin::upload_video)
                .layer(DefaultBodyLimit::max(handlers::admin::MAX_VIDEO_BYTES)),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
