//! Core library for the marketing-site backend: the request-a-demo pipeline,
//! the site catalog, and the HTTP routes that expose them.

pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod site;

pub use config::AppConfig;
pub use demo::{
    build_payload, check_required, DeliveryOutcome, DemoForm, FieldCheck, FormEvent, FormState,
    HttpTransport, SubmissionStatus, SubmissionTransport,
};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::{cors_layer_from_config, cors_layer_permissive};
pub use models::{Acknowledgement, DemoFormFields, DemoRequest, FormField};
pub use site::SiteConfig;

use axum::Router;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub site: Arc<SiteConfig>,
    pub transport: Arc<dyn SubmissionTransport>,
    pub log_payloads: bool,
}

impl AppState {
    pub fn new(site: SiteConfig, transport: Arc<dyn SubmissionTransport>) -> Self {
        Self {
            app_name: format!("{} Site", site.brand.name),
            version: env!("CARGO_PKG_VERSION").to_string(),
            site: Arc::new(site),
            transport,
            log_payloads: false,
        }
    }

    /// Builds the site catalog and the HTTP transport described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let site = load_site(config)?;
        let transport = HttpTransport::new(&config.resolved_submission())?;

        Ok(Self::new(site, Arc::new(transport)).with_log_payloads(config.submission.log_payloads))
    }

    pub fn with_log_payloads(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }
}

fn load_site(config: &AppConfig) -> Result<SiteConfig> {
    if let Some(path) = &config.site.catalog_path {
        info!("Loading site catalog from {}", path.display());
        return SiteConfig::from_toml_file(path);
    }

    SiteConfig::preset(&config.site.brand)
        .ok_or_else(|| AppError::Config(format!("Unknown site brand '{}'", config.site.brand)))
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: AppConfig) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
