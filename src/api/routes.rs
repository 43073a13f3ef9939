use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    health::ping,
    matches::{get_head_to_head, get_matches, save_match},
    players::{get_players, update_players},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/players", get(get_players))
        .route("/api/players/update", post(update_players))
        .route("/api/matches", get(get_matches).post(save_match))
        .route("/api/matches/h2h", get(get_head_to_head))
        // player batches carry full stat histories and grow without bound
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
