//! Team leaderboard endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::rank::{classify, Tier};
use crate::store::ScoreRow;
use crate::AppState;

/// One ranked row, shared by the leaderboard and history responses.
#[derive(Debug, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: i64,
    pub tier: Tier,
}

impl From<ScoreRow> for RankedEntry {
    fn from(row: ScoreRow) -> Self {
        let (tier, _) = classify(row.count);
        Self {
            name: row.name,
            count: row.count,
            tier,
        }
    }
}

/// GET /api/leaderboard
///
/// Current-month counts for the configured roster, highest first.
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<RankedEntry>>, ApiError> {
    let rows = state.store.leaderboard(&state.team).await?;
    Ok(Json(rows.into_iter().map(RankedEntry::from).collect()))
}
