use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::classify::{NEGATIVE, POSITIVE};
use crate::server::error::ApiError;
use crate::server::state::SharedState;

#[derive(Serialize)]
pub(in crate::server) struct HealthResponse {
    ok: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[derive(Serialize)]
pub(in crate::server) struct KeywordCounts {
    positive: usize,
    negative: usize,
}

#[derive(Serialize)]
pub(in crate::server) struct InfoResponse {
    version: &'static str,
    keywords: KeywordCounts,
    history: usize,
}

/// GET /info — version, keyword set sizes and how many entries the session holds
pub async fn info(State(state): State<SharedState>) -> Result<Json<InfoResponse>, ApiError> {
    Ok(Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION"),
        keywords: KeywordCounts {
            positive: POSITIVE.len(),
            negative: NEGATIVE.len(),
        },
        history: state.history_len()?,
    }))
}
