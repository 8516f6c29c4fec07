//! Request and response models

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Ok,
    Error,
}

/// Body returned by the request-demo endpoint: `{"status":"ok"}` or `{"status":"error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub status: AckStatus,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { status: AckStatus::Ok }
    }

    pub fn error() -> Self {
        Self { status: AckStatus::Error }
    }
}
