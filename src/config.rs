//! Configuration management for arXiv Scout.
//!
//! Credentials come from a `.env` file (loaded at startup) or the
//! process environment:
//! - `GROQ_API_KEY` - Required. Your Groq API key.
//! - `DEFAULT_MODEL` - Optional. The LLM model to use. Defaults to `moonshotai/kimi-k2-instruct-0905`.
//! - `HOST` - Optional. Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `8000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `25`.
//! - `ALLOWED_ORIGIN` - Optional. CORS origin for the frontend. Defaults to `http://localhost:3000`.
//! - `ARXIV_MAX_DOCS` - Optional. Maximum papers per search. Defaults to `2`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key
    pub api_key: String,

    /// Default LLM model identifier (Groq format)
    pub default_model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,

    /// Origin allowed to call the API from a browser
    pub allowed_origin: String,

    /// Maximum number of papers returned per arXiv search
    pub arxiv_max_docs: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `GROQ_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GROQ_API_KEY".to_string()))?;

        let default_model = std::env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| "moonshotai/kimi-k2-instruct-0905".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "25".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let arxiv_max_docs = std::env::var("ARXIV_MAX_DOCS")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("ARXIV_MAX_DOCS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            api_key,
            default_model,
            host,
            port,
            max_iterations,
            allowed_origin,
            arxiv_max_docs,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, default_model: String) -> Self {
        Self {
            api_key,
            default_model,
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_iterations: 25,
            allowed_origin: "http://localhost:3000".to_string(),
            arxiv_max_docs: 2,
        }
    }
}
