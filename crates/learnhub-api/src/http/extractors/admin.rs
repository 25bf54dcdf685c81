//! Admin token extractor.
//!
//! Admin routes require `Authorization: Bearer <token>` matching the
//! configured `LEARNHUB_ADMIN_TOKEN`. With no token configured every admin
//! request is rejected.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use secrecy::ExposeSecret;

use crate::http::error::AppError;
use crate::state::AppState;

/// Authenticated admin marker. Extracting this validates the bearer token.
pub struct AdminAuthenticated;

impl FromRequestParts<AppState> for AdminAuthenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.admin_token.as_deref() else {
            return Err(AppError::Unauthorized(
                "Admin API is disabled: no admin token configured".to_string(),
            ));
        };

        let provided = extract_bearer(parts)?;
        if constant_time_eq(provided.as_bytes(), expected.expose_secret().as_bytes()) {
            Ok(AdminAuthenticated)
        } else {
            Err(AppError::Unauthorized("Invalid admin token".to_string()))
        }
    }
}

fn extract_bearer(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get("authorization")
        .ok_or_else(|| {
            AppError::Unauthorized(
                "Missing admin token. Provide it via 'Authorization: Bearer <token>'.".to_string(),
            )
        })?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid Authorization header encoding".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| AppError::Unauthorized("Authorization must use the Bearer scheme".to_string()))
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
