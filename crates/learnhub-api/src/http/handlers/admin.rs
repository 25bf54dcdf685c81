//! Admin settings and video upload endpoints.
//!
//! Every handler requires [`AdminAuthenticated`]. Extractor rejections go
//! through [`AppError`] so they keep the `{"error"}` body.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use serde::Deserialize;
use serde_json::{Value, json};

use learnhub_types::settings::{SettingRow, SiteSettings, VideoKind};

use crate::http::error::AppError;
use crate::http::extractors::admin::AdminAuthenticated;
use crate::state::AppState;

/// Largest accepted video upload.
pub const MAX_VIDEO_BYTES: usize = 200 * 1024 * 1024;

/// GET /api/v1/admin/settings -- every stored row.
pub async fn list_settings(
    State(state): State<AppState>,
    _auth: AdminAuthenticated,
) -> Result<Json<Vec<SettingRow>>, AppError> {
    Ok(Json(state.site.list_rows().await?))
}

/// PUT /api/v1/admin/settings -- save the full site-settings form.
pub async fn put_site_settings(
    State(state): State<AppState>,
    _auth: AdminAuthenticated,
    site: Result<Json<SiteSettings>, JsonRejection>,
) -> Result<Json<SiteSettings>, AppError> {
    let Json(site) = site?;
    state.site.save_site_settings(&site).await?;
    Ok(Json(site))
}

#[derive(Debug, Deserialize)]
pub struct SetValueBody {
    pub value: Value,
}

/// PUT /api/v1/admin/settings/{key} -- upsert one key, e.g. `bot_knowledge`.
pub async fn put_setting(
    State(state): State<AppState>,
    _auth: AdminAuthenticated,
    key: Result<Path<String>, PathRejection>,
    body: Result<Json<SetValueBody>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(key) = key?;
    let Json(body) = body?;
    state.site.save(&key, &body.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub filename: Option<String>,
}

/// POST /api/v1/admin/videos/{kind}?filename=.. -- raw body upload.
///
/// Returns `{"url": ...}`; the URL is also saved under the kind's key.
pub async fn upload_video(
    State(state): State<AppState>,
    _auth: AdminAuthenticated,
    kind: Result<Path<String>, PathRejection>,
    query: Result<Query<UploadQuery>, QueryRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(kind) = kind?;
    let Query(query) = query?;
    let body = body?;
    let kind: VideoKind = kind.parse().map_err(AppError::Validation)?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("video/mp4");

    let url = state
        .site
        .upload_video(kind, query.filename.as_deref(), content_type, body)
        .await?;
    Ok(Json(json!({ "url": url })))
}
