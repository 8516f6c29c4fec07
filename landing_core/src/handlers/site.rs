//! Site catalog handlers

use crate::{
    error::{AppError, Result},
    models::request::ApiResponse,
    site::REQUEST_DEMO_SECTION,
    AppState,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

pub async fn handle_site(State(state): State<AppState>) -> impl IntoResponse {
    let site = &state.site;
    Json(ApiResponse::success(serde_json::json!({
        "brand": site.brand,
        "nav": site.nav,
        "sections": site.sections,
        "contact": site.contact,
    })))
}

pub async fn handle_list_projects(State(state): State<AppState>) -> impl IntoResponse {
    let projects: Vec<serde_json::Value> = state
        .site
        .projects
        .iter()
        .map(|p| {
            serde_json::json!({
                "slug": p.slug,
                "name": p.name,
                "client": p.client,
                "href": format!("/projects/{}", p.slug),
            })
        })
        .collect();

    Json(ApiResponse::success(serde_json::json!({
        "projects": projects,
        "count": projects.len(),
    })))
}

pub async fn handle_project_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    render_page(&state, &slug, None)
}

pub async fn handle_project_section(
    State(state): State<AppState>,
    Path((slug, section)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    render_page(&state, &slug, Some(&section))
}

pub async fn handle_request_demo_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    render_page(&state, &slug, Some(REQUEST_DEMO_SECTION))
}

fn render_page(
    state: &AppState,
    slug: &str,
    section: Option<&str>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    info!("GET project page {} section {:?}", slug, section);

    let project = state
        .site
        .project(slug)
        .ok_or_else(|| AppError::NotFound(format!("Project '{}' not found", slug)))?;

    let page = project.page(section).ok_or_else(|| {
        AppError::NotFound(format!(
            "Section '{}' not found for project '{}'",
            section.unwrap_or_default(),
            slug
        ))
    })?;

    Ok(Json(ApiResponse::success(serde_json::to_value(&page)?)))
}
