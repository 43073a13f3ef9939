use axum::{
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::auth::authorize;
use crate::api::errors::ApiError;
use crate::api::models::{HeadToHeadParams, HeadToHeadResponse, StatusResponse};
use crate::domain::MatchRecord;

pub async fn get_matches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MatchRecord>>, ApiError> {
    let matches = state.matches.list()?;
    Ok(Json(matches))
}

pub async fn save_match(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    authorize(&headers, &state.config.auth.api_key)?;

    let record: MatchRecord = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Request body must be a match object."))?;
    if !record.has_winner() {
        return Err(ApiError::bad_request("Match record must include a winner."));
    }

    state.matches.append(record)?;

    Ok(Json(StatusResponse::success("Match record saved.")))
}

pub async fn get_head_to_head(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeadToHeadParams>,
) -> Result<Json<HeadToHeadResponse>, ApiError> {
    let (Some(player1), Some(player2)) = (
        params.player1.filter(|name| !name.is_empty()),
        params.player2.filter(|name| !name.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Two player names are required for H2H stats."));
    };

    let record = state.matches.head_to_head(&player1, &player2)?;

    Ok(Json(HeadToHeadResponse::new(player1, player2, record)))
}
