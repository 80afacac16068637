//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TAVUS_COACH_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use tavus_coach::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod script;
mod server;
mod session;
mod tavus;

pub use error::{ConfigError, ValidationError};
pub use script::ScriptConfig;
pub use server::{Environment, ServerConfig};
pub use session::SessionConfig;
pub use tavus::TavusApiConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults, so loading succeeds with an empty environment;
/// missing credentials surface when the client is built or a session starts.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Tavus API configuration (key, base URL, timeout)
    #[serde(default)]
    pub tavus: TavusApiConfig,

    /// Settings applied to every launched session
    #[serde(default)]
    pub session: SessionConfig,

    /// Conversation script overrides
    #[serde(default)]
    pub script: ScriptConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TAVUS_COACH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TAVUS_COACH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TAVUS_COACH__TAVUS__API_KEY=...` -> `tavus.api_key = ...`
    /// - `TAVUS_COACH__SESSION__DOCUMENT_IDS=d1,d2` -> `session.document_ids = "d1,d2"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TAVUS_COACH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.tavus.validate(&self.server.environment)?;

        // Server budget wraps the remote call.
        if self.server.request_timeout_secs <= self.tavus.timeout_secs {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                api_secs: self.tavus.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
