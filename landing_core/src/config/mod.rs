//! Layered application configuration

pub mod settings;

pub use settings::{AppConfig, CorsConfig, ServerConfig, SiteSettings, SubmissionConfig, TransportTarget};
