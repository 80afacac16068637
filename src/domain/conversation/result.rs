//! SessionResult - a conversation the remote service has created.

use serde::Serialize;

/// Status reported when the remote response carries none.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Parsed success response of a create-conversation call.
///
/// Immutable once created; handed to the caller that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    conversation_id: String,
    conversation_url: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    meeting_token: Option<String>,
}

impl SessionResult {
    /// Creates a result, defaulting a missing status to [`UNKNOWN_STATUS`].
    pub fn new(
        conversation_id: impl Into<String>,
        conversation_url: impl Into<String>,
        status: Option<String>,
        meeting_token: Option<String>,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            conversation_url: conversation_url.into(),
            status: status.unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            meeting_token,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// URL where participants join the session.
    pub fn conversation_url(&self) -> &str {
        &self.conversation_url
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Token for private rooms (present when the session requires auth).
    pub fn meeting_token(&self) -> Option<&str> {
        self.meeting_token.as_deref()
    }
}
