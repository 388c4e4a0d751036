use axum::Json;
use serde::Serialize;

use crate::classify::{NEGATIVE, POSITIVE};

#[derive(Serialize)]
pub(in crate::server) struct KeywordsResponse {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

/// GET /keywords
pub async fn get_keywords() -> Json<KeywordsResponse> {
    Json(KeywordsResponse {
        positive: POSITIVE.words(),
        negative: NEGATIVE.words(),
    })
}
