//! Single-employee profile endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::rank::{classify, video_for, Tier};
use crate::AppState;

/// Role title shown when the reference data has none.
const DEFAULT_ROLE: &str = "Collaborator";

/// Profile payload: identity plus the classifier's view of this month's
/// count. `video` is set only when the count sits exactly on a reward
/// threshold.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub name: String,
    pub role: String,
    pub count: i64,
    pub next_threshold: i64,
    pub tier: Tier,
    pub video: Option<&'static str>,
}

/// GET /api/profile/:employee_id
///
/// 404 when the id is unknown, in live and fixture mode alike.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let row = state
        .store
        .profile(employee_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let (tier, next_threshold) = classify(row.count);

    Ok(Json(ProfileResponse {
        name: row.name,
        role: row.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        count: row.count,
        next_threshold,
        tier,
        video: video_for(row.count),
    }))
}
