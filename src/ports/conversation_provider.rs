//! Conversation Provider Port - Interface for conversational video services.
//!
//! This port abstracts the remote service that creates real-time video
//! conversations, so the start-conversation flow does not depend on a
//! specific vendor or on HTTP.
//!
//! # Design
//!
//! - One operation: create a conversation from a validated `SessionRequest`
//! - Single best-effort attempt, no retries and no idempotency key
//! - Errors fall into four kinds (see [`ErrorKind`])
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedProvider;
//!
//! #[async_trait]
//! impl ConversationProvider for FixedProvider {
//!     async fn create_conversation(
//!         &self,
//!         _request: &SessionRequest,
//!     ) -> Result<SessionResult, ConversationError> {
//!         Ok(SessionResult::new("c1", "https://example.com/c1", None, None))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("fixed", "memory://")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::conversation::{SessionRequest, SessionResult};
use crate::domain::foundation::ValidationError;

/// Port for creating remote conversation sessions.
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    /// Creates one conversation session.
    ///
    /// Two calls with identical requests may create two distinct sessions.
    async fn create_conversation(
        &self,
        request: &SessionRequest,
    ) -> Result<SessionResult, ConversationError>;

    /// Get provider information (name, endpoint).
    fn provider_info(&self) -> ProviderInfo;
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "tavus").
    pub name: String,
    /// Base URL requests are sent to.
    pub base_url: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }
}

/// Conversation provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    /// A required identifier (API key, persona id, replica id) is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote API answered with status >= 400.
    #[error("conversation API error {status}: {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Raw response body, unparsed.
        body: String,
    },

    /// The remote API did not answer within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The remote API could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// A success response did not match the expected contract.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Coarse classification of [`ConversationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Service,
    Transport,
    Parse,
}

impl ConversationError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a service error from a failed response.
    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::Service {
            status,
            body: body.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns the error's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversationError::Configuration(_) => ErrorKind::Configuration,
            ConversationError::Service { .. } => ErrorKind::Service,
            ConversationError::Timeout { .. } | ConversationError::Network(_) => {
                ErrorKind::Transport
            }
            ConversationError::Parse(_) => ErrorKind::Parse,
        }
    }

    /// Returns true if the remote service could not be reached in time.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

impl From<ValidationError> for ConversationError {
    fn from(err: ValidationError) -> Self {
        ConversationError::Configuration(err.to_string())
    }
}
