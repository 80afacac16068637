//! HTTP adapter for conversation endpoints.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::{ErrorResponse, StartConversationResponse};
pub use handlers::ConversationAppState;
pub use routes::conversation_routes;
