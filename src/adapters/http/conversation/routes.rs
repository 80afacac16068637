//! HTTP routes for conversation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{index, main_js, start_conversation, ConversationAppState};

/// Creates the conversation router.
///
/// # Routes
/// - `GET /` - Landing page
/// - `GET /static/main.js` - Landing page script
/// - `POST /start` - Start a conversation session
pub fn conversation_routes() -> Router<ConversationAppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/main.js", get(main_js))
        .route("/start", post(start_conversation))
}
