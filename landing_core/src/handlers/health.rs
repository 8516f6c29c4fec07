//! Liveness handler

use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "status": "alive",
            "brand": state.site.brand.name,
            "version": state.version,
            "timestamp": chrono::Utc::now().timestamp()
        }))),
    )
}
