//! # API Configuration Module
//!
//! Loads server configuration from environment variables, with defaults
//! where a value is optional.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: host address to bind (default: "0.0.0.0")
//! - `API_PORT`: port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `API_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)
//! - `ENGINE_TICK_SECONDS`: schedule re-evaluation interval (default: 30)
//! - `STAFF_PASSWORD`: shared staff login password; unset disables staff login
//! - `SUGGESTION_API_URL`: completion endpoint for the suggestion flows;
//!   unset disables the suggestion routes
//! - `SUGGESTION_API_KEY`: bearer token for the completion endpoint
//! - `SUGGESTION_MODEL`: model name sent with each completion request

use eyre::{Result, WrapErr};
use std::env;

/// Settings for the suggestion (LLM) collaborator.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Seconds between periodic schedule evaluations. A tunable, not a
    /// correctness knob: any interval works, shorter just tightens the lag
    /// between wall clock and stored statuses.
    pub tick_interval: u64,

    /// Shared staff password; `None` disables staff logins
    pub staff_password: Option<String>,

    /// Suggestion service settings; `None` disables the suggestion routes
    pub suggestion: Option<SuggestionConfig>,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is unset or a numeric value cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        // Engine settings
        let tick_interval = env::var("ENGINE_TICK_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid ENGINE_TICK_SECONDS value")?;

        // Login settings
        let staff_password = env::var("STAFF_PASSWORD").ok();

        // Suggestion service settings
        let suggestion = env::var("SUGGESTION_API_URL").ok().map(|endpoint| SuggestionConfig {
            endpoint,
            api_key: env::var("SUGGESTION_API_KEY").ok(),
            model: env::var("SUGGESTION_MODEL").unwrap_or_else(|_| "default".to_string()),
        });

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout,
            tick_interval,
            staff_password,
            suggestion,
        })
    }

    /// Returns the server address as a string, e.g. `"0.0.0.0:3000"`.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
