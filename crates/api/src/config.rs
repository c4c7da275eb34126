use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Gemini endpoint and credentials.
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`GeminiConfig::from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            gemini: GeminiConfig::from_env(),
        }
    }
}

/// Gemini `generateContent` settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub model: String,
    /// May be empty, in which case every AI call fails and the fallback is used.
    pub api_key: String,
    /// Upper bound on a single recommendation call (default: `8`).
    pub timeout_secs: u64,
}

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

impl GeminiConfig {
    /// | Env Var               | Default                                             |
    /// |-----------------------|-----------------------------------------------------|
    /// | `GEMINI_API_KEY`      | empty                                               |
    /// | `GEMINI_API_URL`      | `https://generativelanguage.googleapis.com/v1beta`  |
    /// | `GEMINI_MODEL`        | `gemini-2.5-flash`                                  |
    /// | `GEMINI_TIMEOUT_SECS` | `8`                                                 |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set; recommendations will use the random fallback");
        }

        let api_url =
            std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.into());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into());

        let timeout_secs: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("GEMINI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            model,
            api_key,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
