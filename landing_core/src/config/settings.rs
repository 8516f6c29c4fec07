use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub submission: SubmissionConfig,
    pub site: SiteSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub permissive: bool,
}

/// Where demo requests are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportTarget {
    /// The deployment's own `/api/request-demo` endpoint.
    RouteHandler,
    /// A hosted third-party forms API.
    HostedForms,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Defaults to this server's own `/api/request-demo` when unset.
    pub endpoint: Option<String>,
    pub target: TransportTarget,
    pub timeout_seconds: u64,
    /// Write full submission contents to the log. Off by default.
    pub log_payloads: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub brand: String,
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            submission: SubmissionConfig::default(),
            site: SiteSettings::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            permissive: false,
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            target: TransportTarget::RouteHandler,
            timeout_seconds: 10,
            log_payloads: false,
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand: "gyansopan".to_string(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if let Some(endpoint) = &self.submission.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::Message(format!(
                    "Submission endpoint must be an http(s) URL, got '{}'",
                    endpoint
                )));
            }
        }

        if self.submission.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Submission timeout must be greater than 0".to_string(),
            ));
        }

        // The relay must get its transport outcome before the request timeout fires.
        if self.submission.timeout_seconds >= self.server.request_timeout_seconds {
            return Err(ConfigError::Message(format!(
                "Submission timeout ({}s) must be shorter than the request timeout ({}s)",
                self.submission.timeout_seconds, self.server.request_timeout_seconds
            )));
        }

        if self.site.brand.trim().is_empty() && self.site.catalog_path.is_none() {
            return Err(ConfigError::Message(
                "Either site.brand or site.catalog_path must be set".to_string(),
            ));
        }

        if self.submission.log_payloads {
            tracing::warn!("submission.log_payloads is enabled - contact details will be written to logs");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Where demo requests go: the configured endpoint, or this server's own
    /// route handler on the loopback address when the host is a wildcard.
    pub fn submission_endpoint(&self) -> String {
        if let Some(endpoint) = &self.submission.endpoint {
            return endpoint.clone();
        }

        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
            host => host,
        };
        format!("http://{}:{}/api/request-demo", host, self.server.port)
    }

    /// Submission settings with the endpoint filled in.
    pub fn resolved_submission(&self) -> SubmissionConfig {
        SubmissionConfig {
            endpoint: Some(self.submission_endpoint()),
            ..self.submission.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.submission.target, TransportTarget::RouteHandler);
        assert!(!config.submission.log_payloads);
        assert_eq!(config.site.brand, "gyansopan");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.server.port = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.submission.endpoint = Some("ftp://example.com/forms".to_string());
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.submission.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.site.brand = "  ".to_string();
        assert!(config.validate().is_err());

        config.site.catalog_path = Some(PathBuf::from("site.toml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");

        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_submission_timeout_must_fit_request_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_seconds = 1;
        config.submission.timeout_seconds = 5;
        assert!(config.validate().is_err());

        config.submission.timeout_seconds = 1;
        assert!(config.validate().is_err());

        config.server.request_timeout_seconds = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_submission_endpoint_follows_bind_address() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.submission_endpoint(),
            "http://127.0.0.1:3000/api/request-demo"
        );

        config.server.port = 8080;
        assert_eq!(
            config.submission_endpoint(),
            "http://127.0.0.1:8080/api/request-demo"
        );

        config.server.host = "0.0.0.0".to_string();
        assert_eq!(
            config.resolved_submission().endpoint.as_deref(),
            Some("http://127.0.0.1:8080/api/request-demo")
        );

        config.server.host = "example.internal".to_string();
        assert_eq!(
            config.submission_endpoint(),
            "http://example.internal:8080/api/request-demo"
        );

        config.submission.endpoint = Some("https://forms.example.com/f/abc".to_string());
        assert_eq!(config.submission_endpoint(), "https://forms.example.com/f/abc");
    }

    #[test]
    fn test_transport_target_names() {
        let target: TransportTarget = serde_json::from_str(r#""hosted_forms""#).unwrap();
        assert_eq!(target, TransportTarget::HostedForms);
        assert_eq!(
            serde_json::to_string(&TransportTarget::RouteHandler).unwrap(),
            r#""route_handler""#
        );
    }

    #[test]
    fn test_config_loading() {
        let config = AppConfig::load().expect("Should load default configuration");

        assert!(!config.server.host.is_empty());
        assert!(config.server.port > 0);
        assert!(config.submission.timeout_seconds > 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        std::env::set_var("APP__SERVER__PORT", "8080");
        std::env::set_var("APP__SUBMISSION__LOG_PAYLOADS", "true");
        std::env::set_var(
            "APP__CORS__ALLOWED_ORIGINS",
            "http://a.example,http://b.example",
        );

        let loaded = AppConfig::load();

        std::env::remove_var("APP__SERVER__PORT");
        std::env::remove_var("APP__SUBMISSION__LOG_PAYLOADS");
        std::env::remove_var("APP__CORS__ALLOWED_ORIGINS");

        let config = loaded.expect("Should load configuration from the environment");
        assert_eq!(config.server.port, 8080);
        assert!(config.submission.log_payloads);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
        assert_eq!(
            config.submission_endpoint(),
            "http://127.0.0.1:8080/api/request-demo"
        );
    }
}
