//! Configuration management for dayplan.
//!
//! Configuration can be set via environment variables:
//! - `OPENAI_API_KEY` - API key for the completion service. May be absent at
//!   startup; plan requests then fail with a `failed-precondition` error.
//! - `OPENAI_MODEL` - Optional. Completion model id. Defaults to `gpt-4o-mini`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `DEV_MODE` - Optional. `true` disables the caller identity check.
//! - `DASHBOARD_PASSWORD` - Password accepted by `/api/auth/login`.
//! - `JWT_SECRET` - Secret for signing login tokens.
//! - `JWT_TTL_DAYS` - Optional. Login token lifetime. Defaults to `30`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Auth configuration for the login endpoint and token checks.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Password accepted by the login endpoint
    pub dashboard_password: Option<String>,

    /// Secret for signing and verifying JWTs
    pub jwt_secret: Option<String>,

    /// Login token lifetime in days
    pub jwt_ttl_days: i64,
}

impl AuthConfig {
    /// Whether API requests must carry a valid token.
    pub fn auth_required(&self, dev_mode: bool) -> bool {
        !dev_mode
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion API key. Absence fails plan requests, not startup.
    pub api_key: Option<String>,

    /// Completion model identifier
    pub model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Dev mode disables the caller identity check
    pub dev_mode: bool,

    /// Auth settings
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a numeric variable does not
    /// parse. A missing `OPENAI_API_KEY` is not an error here; the plan
    /// endpoint reports it per call.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY").ok();

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let dev_mode = std::env::var("DEV_MODE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let auth = AuthConfig {
            dashboard_password: std::env::var("DASHBOARD_PASSWORD").ok(),
            jwt_secret: std::env::var("JWT_SECRET").ok(),
            jwt_ttl_days: std::env::var("JWT_TTL_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|e| {
                    ConfigError::InvalidValue("JWT_TTL_DAYS".to_string(), format!("{}", e))
                })?,
        };

        Ok(Self {
            api_key,
            model,
            host,
            port,
            dev_mode,
            auth,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            api_key,
            model,
            host: "127.0.0.1".to_string(),
            port: 3000,
            dev_mode: false,
            auth: AuthConfig {
                jwt_ttl_days: 30,
                ..AuthConfig::default()
            },
        }
    }
}
