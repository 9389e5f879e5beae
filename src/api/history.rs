//! Monthly history endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::leaderboard::RankedEntry;
use crate::error::ApiError;
use crate::AppState;

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2020..=2100;
const MONTH_RANGE: std::ops::RangeInclusive<u32> = 1..=12;

/// Query parameters; both are required but parsed as optional so the
/// missing case gets a specific message instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// GET /api/history?year=&month=
///
/// Validates the window before touching storage. The optional configured
/// cap truncates to the top N rows.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<RankedEntry>>, ApiError> {
    let (year, month) = match (query.year, query.month) {
        (Some(year), Some(month)) => (year, month),
        _ => {
            return Err(ApiError::BadRequest(
                "missing required parameters: year and month".to_string(),
            ))
        }
    };

    if !YEAR_RANGE.contains(&year) {
        return Err(ApiError::BadRequest(format!(
            "year must be between {} and {}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        )));
    }
    if !MONTH_RANGE.contains(&month) {
        return Err(ApiError::BadRequest(
            "month must be between 1 and 12".to_string(),
        ));
    }

    let mut rows = state.store.history(year, month, &state.team).await?;
    if let Some(limit) = state.history_limit {
        rows.truncate(limit);
    }

    Ok(Json(rows.into_iter().map(RankedEntry::from).collect()))
}
