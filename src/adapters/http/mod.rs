//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Json, Router};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::trace::TraceLayer;

pub mod conversation;

// Re-export key types for convenience
pub use conversation::conversation_routes;
pub use conversation::ConversationAppState;
pub use conversation::ErrorResponse;

/// Builds the full application router with tracing and a request timeout.
///
/// A request that outlives `request_timeout` is answered like any other
/// failure: `500` with an `{"error": message}` body.
pub fn app_router(state: ConversationAppState, request_timeout: Duration) -> Router {
    conversation_routes()
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    handle_middleware_error(err, request_timeout)
                }))
                .timeout(request_timeout),
        )
        .layer(TraceLayer::new_for_http())
}

fn handle_middleware_error(
    err: BoxError,
    request_timeout: Duration,
) -> (StatusCode, Json<ErrorResponse>) {
    let message = if err.is::<Elapsed>() {
        tracing::warn!(
            timeout_ms = request_timeout.as_millis() as u64,
            "Request exceeded server budget"
        );
        format!(
            "request timed out after {}ms",
            request_timeout.as_millis()
        )
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        format!("internal error: {}", err)
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(message)))
}
