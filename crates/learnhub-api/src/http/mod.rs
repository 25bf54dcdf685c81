//! HTTP layer for the Learning Hub.
//!
//! Axum-based API at `/api/v1/`: the streaming chat proxy, public site
//! settings, and the token-guarded admin routes.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
