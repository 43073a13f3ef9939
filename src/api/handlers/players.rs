use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;

use super::AppState;
use crate::api::auth::authorize;
use crate::api::errors::ApiError;
use crate::api::models::StatusResponse;
use crate::domain::PlayerUpdate;

pub async fn get_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let players = state.players.list()?;
    Ok(Json(players))
}

pub async fn update_players(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    authorize(&headers, &state.config.auth.api_key)?;

    let updates: Vec<PlayerUpdate> = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Request body must be a list of player objects."))?;

    let processed = state.players.upsert_batch(&updates)?;

    Ok(Json(StatusResponse::success(format!("{} players updated.", processed))))
}
