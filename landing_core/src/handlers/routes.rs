//! Route table

use super::{health, request_demo, site};
use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(health::handle_health))
        .route("/api/site", get(site::handle_site))
        .route("/api/projects", get(site::handle_list_projects))
        .route("/api/projects/:slug", get(site::handle_project_page))
        .route(
            "/api/projects/:slug/request-demo",
            get(site::handle_request_demo_page).post(request_demo::handle_project_request_demo),
        )
        .route("/api/projects/:slug/:section", get(site::handle_project_section))
        .route(
            "/api/request-demo",
            axum::routing::post(request_demo::handle_request_demo),
        )
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "brand": state.site.brand.name,
        "endpoints": {
            "health": "GET /health",
            "site": "GET /api/site",
            "projects": "GET /api/projects",
            "project": "GET /api/projects/{slug}",
            "project_section": "GET /api/projects/{slug}/{section}",
            "project_request_demo": "POST /api/projects/{slug}/request-demo",
            "request_demo": "POST /api/request-demo"
        }
    })))
}
