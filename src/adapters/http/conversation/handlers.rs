//! HTTP handlers for conversation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::application::{StartConversationCommand, StartConversationHandler};
use crate::domain::conversation::ConversationScript;
use crate::ports::{ConversationError, ErrorKind};

use super::dto::{ErrorResponse, StartConversationResponse};
use super::page::{render_index, MAIN_JS};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for conversation endpoints. Read-only after startup.
#[derive(Clone)]
pub struct ConversationAppState {
    start_handler: Arc<StartConversationHandler>,
    script: Arc<ConversationScript>,
}

impl ConversationAppState {
    pub fn new(start_handler: Arc<StartConversationHandler>, script: ConversationScript) -> Self {
        Self {
            start_handler,
            script: Arc::new(script),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /start - Create a new conversation session
pub async fn start_conversation(State(state): State<ConversationAppState>) -> Response {
    let cmd = StartConversationCommand {
        script: state.script.as_ref().clone(),
    };

    match state.start_handler.handle(cmd).await {
        Ok(result) => {
            let response: StartConversationResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_conversation_error(e),
    }
}

/// GET / - Landing page
pub async fn index(State(state): State<ConversationAppState>) -> Html<String> {
    Html(render_index(state.start_handler.settings()))
}

/// GET /static/main.js - Landing page script
pub async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Every failure is a 500 with `{"error": message}`.
fn handle_conversation_error(error: ConversationError) -> Response {
    match error.kind() {
        ErrorKind::Configuration => {
            tracing::error!(error = %error, "Conversation start misconfigured");
        }
        ErrorKind::Service => {
            tracing::warn!(error = %error, "Conversation API rejected request");
        }
        ErrorKind::Transport => {
            tracing::warn!(error = %error, "Conversation API unreachable");
        }
        ErrorKind::Parse => {
            tracing::error!(error = %error, "Conversation API returned an unexpected body");
        }
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(error.to_string())),
    )
        .into_response()
}
