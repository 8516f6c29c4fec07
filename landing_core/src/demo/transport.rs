use crate::{
    config::{SubmissionConfig, TransportTarget},
    error::{AppError, Result},
    models::DemoRequest,
};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Classified result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { status: u16 },
    Rejected { status: u16 },
    Unreachable { reason: String },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            DeliveryOutcome::Delivered { status }
        } else {
            DeliveryOutcome::Rejected { status }
        }
    }
}

/// Delivers a demo request somewhere. Implementations absorb every failure
/// into the returned outcome.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn deliver(&self, request: &DemoRequest) -> DeliveryOutcome;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    target: TransportTarget,
    log_payloads: bool,
}

impl HttpTransport {
    /// Expects a resolved endpoint; see `AppConfig::resolved_submission`.
    pub fn new(config: &SubmissionConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| AppError::Config("Submission endpoint is not set".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            target: config.target,
            log_payloads: config.log_payloads,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn target(&self) -> TransportTarget {
        self.target
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn deliver(&self, request: &DemoRequest) -> DeliveryOutcome {
        let submission_id = Uuid::new_v4();

        if self.log_payloads {
            debug!(
                %submission_id,
                payload = %serde_json::to_string(request).unwrap_or_default(),
                "sending demo request"
            );
        } else {
            debug!(%submission_id, request = %request.redacted(), "sending demo request");
        }

        let mut builder = self.client.post(&self.endpoint).json(request);
        if self.target == TransportTarget::HostedForms {
            builder = builder.header(ACCEPT, HeaderValue::from_static("application/json"));
        }

        let outcome = match builder.send().await {
            Ok(response) => DeliveryOutcome::from_status(response.status().as_u16()),
            Err(e) => DeliveryOutcome::Unreachable {
                reason: e.to_string(),
            },
        };

        match &outcome {
            DeliveryOutcome::Delivered { status } => {
                info!(%submission_id, status, project = %request.project, "demo request delivered");
            }
            DeliveryOutcome::Rejected { status } => {
                warn!(%submission_id, status, endpoint = %self.endpoint, "demo request rejected");
            }
            DeliveryOutcome::Unreachable { reason } => {
                warn!(%submission_id, endpoint = %self.endpoint, reason = %reason, "demo request endpoint unreachable");
            }
        }

        outcome
    }
}
