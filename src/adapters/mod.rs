//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `conversation` - Conversation provider implementations (Tavus, mock)
//! - `http` - Landing page and start endpoint

pub mod conversation;
pub mod http;

pub use conversation::{MockConversationProvider, TavusConfig, TavusProvider};
pub use http::{app_router, ConversationAppState};
