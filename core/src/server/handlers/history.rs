use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::history::HistoryEntry;
use crate::server::error::ApiError;
use crate::server::state::SharedState;

#[derive(Deserialize)]
pub(in crate::server) struct HistoryQuery {
    // Kept raw so a bad value gets the same JSON error body as limit=0
    limit: Option<String>,
}

/// Parse `?limit=` into a positive count.
fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, ApiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ApiError::BadRequest("limit must be at least 1".to_owned())),
        Ok(limit) => Ok(Some(limit)),
        Err(_) => Err(ApiError::BadRequest(format!(
            "limit must be a positive integer, got {raw:?}"
        ))),
    }
}

/// GET /history?limit= — session entries, newest first
pub async fn list_history(
    State(state): State<SharedState>,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let limit = parse_limit(q.limit.as_deref())?;
    Ok(Json(state.history(limit)?))
}
