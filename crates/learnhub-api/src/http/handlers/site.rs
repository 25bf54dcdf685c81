//! Public landing-page data.

use axum::Json;
use axum::extract::State;

use learnhub_core::prompt::courses::course_ids;
use learnhub_types::settings::SiteSettings;

use crate::state::AppState;

/// GET /api/v1/site-settings -- settings overlaid on the defaults.
pub async fn get_site_settings(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(state.site.load().await)
}

/// GET /api/v1/courses -- every course id with course-specific instructions.
pub async fn list_courses() -> Json<Vec<&'static str>> {
    Json(course_ids())
}
