//! Request-a-demo endpoints

use crate::{
    demo::{DemoForm, SubmissionStatus},
    error::{AppError, Result},
    models::{Acknowledgement, DemoFormFields},
    AppState,
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::{error, info};

/// Acknowledges any JSON body. There is no persistence or notification
/// behind this endpoint yet.
pub async fn handle_request_demo(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let parsed = body
        .map_err(|e| e.body_text())
        .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).map_err(|e| e.to_string()));

    match parsed {
        Ok(data) => {
            if state.log_payloads {
                info!(payload = %data, "Demo request received");
            } else {
                let project = data.get("project").and_then(Value::as_str).unwrap_or("-");
                let fields: Vec<&str> = data
                    .as_object()
                    .map(|object| object.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                info!(project, ?fields, "Demo request received");
            }
            (StatusCode::OK, Json(Acknowledgement::ok()))
        }
        Err(reason) => {
            error!(reason = %reason, "Failed to read demo request");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Acknowledgement::error()))
        }
    }
}

/// Server-side form: fills a [`DemoForm`] for the project and submits it
/// through the configured transport.
pub async fn handle_project_request_demo(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: std::result::Result<Json<DemoFormFields>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let project = state
        .site
        .project(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Project '{}' not found", slug)))?;

    let Json(fields) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    info!("POST /api/projects/{}/request-demo", slug);

    let mut form = DemoForm::new(project.name.clone(), state.transport.clone());
    form.fill(fields);

    let status = form.submit().await;
    let code = match status {
        SubmissionStatus::Success => StatusCode::OK,
        SubmissionStatus::Error => StatusCode::BAD_GATEWAY,
        SubmissionStatus::Idle | SubmissionStatus::Sending => {
            return Err(AppError::MissingFields(form.state().missing.clone()));
        }
    };

    Ok((
        code,
        Json(serde_json::json!({
            "status": status,
            "message": status.message(),
            "project": project.name,
        })),
    ))
}
