use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::classify::{analyze, Label};
use crate::server::error::ApiError;
use crate::server::state::SharedState;

fn default_record() -> bool {
    true
}

#[derive(Deserialize)]
pub(in crate::server) struct ClassifyRequest {
    text: String,
    /// Append the result to the session history
    #[serde(default = "default_record")]
    record: bool,
}

#[derive(Serialize)]
pub(in crate::server) struct ClassifyResponse {
    text: String,
    label: Label,
    color: &'static str,
    positive_score: usize,
    negative_score: usize,
}

/// POST /classify — blank text is a no-op answered with 204
pub async fn classify(
    State(state): State<SharedState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Response, ApiError> {
    if req.text.trim().is_empty() {
        debug!("Ignoring blank classify request");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let analysis = analyze(&req.text);
    if req.record {
        state.record(&req.text, analysis.label)?;
    }

    Ok(Json(ClassifyResponse {
        text: req.text,
        label: analysis.label,
        color: analysis.label.color_hex(),
        positive_score: analysis.positive_score,
        negative_score: analysis.negative_score,
    })
    .into_response())
}
