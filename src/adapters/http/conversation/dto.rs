//! HTTP DTOs for conversation endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::SessionResult;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a started conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartConversationResponse {
    pub conversation_id: String,
    pub conversation_url: String,
    pub status: String,
}

impl From<SessionResult> for StartConversationResponse {
    fn from(result: SessionResult) -> Self {
        Self {
            conversation_id: result.conversation_id().to_string(),
            conversation_url: result.conversation_url().to_string(),
            status: result.status().to_string(),
        }
    }
}

/// Error body returned by the start endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_response_conversion_omits_meeting_token() {
        let result = SessionResult::new(
            "c1",
            "https://x/c1",
            Some("active".to_string()),
            Some("secret-token".to_string()),
        );

        let response: StartConversationResponse = result.into();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "conversation_id": "c1",
                "conversation_url": "https://x/c1",
                "status": "active",
            })
        );
    }

    #[test]
    fn error_response_serializes_error_field() {
        let body = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(body, json!({"error": "boom"}));
    }
}
