use std::env;

use crate::auth::identity::IdentityConfig;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Hard ceiling on request handling time, enforced by a timeout layer.
    pub request_timeout_secs: u64,
    pub identity: IdentityConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `HOST` | `0.0.0.0` | Bind address |
    /// | `PORT` | `8000` | Bind port |
    /// | `CORS_ORIGINS` | `http://localhost:5173` | Comma-separated allowed origins |
    /// | `REQUEST_TIMEOUT_SECS` | `30` | Per-request timeout in seconds |
    ///
    /// Panics if `AUTH_JWT_SECRET` is missing; the API cannot
    /// authenticate anyone without it.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .expect("PORT must be a valid port number");
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a number");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            identity: IdentityConfig::from_env(),
        }
    }
}
