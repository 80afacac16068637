//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Tavus API timeout")]
    InvalidApiTimeout,

    #[error("Request timeout ({request_secs}s) must exceed the Tavus API timeout ({api_secs}s)")]
    RequestTimeoutTooShort { request_secs: u64, api_secs: u64 },

    #[error("Tavus base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Tavus base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,
}
