use axum::response::Json;

use crate::api::models::StatusResponse;

pub async fn ping() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
