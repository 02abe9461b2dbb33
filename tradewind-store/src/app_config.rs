use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub product_service: CollaboratorConfig,
    pub payment_service: CollaboratorConfig,
    #[serde(default)]
    pub http: HttpClientConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Base URL of one downstream collaborator
#[derive(Debug, Deserialize, Clone)]
pub struct CollaboratorConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpClientConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. TRADEWIND__SERVER__PORT=8082
            .add_source(config::Environment::with_prefix("TRADEWIND").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
