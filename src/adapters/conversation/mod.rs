//! Conversation Provider Adapters.
//!
//! Implementations of the ConversationProvider port.
//!
//! ## Available Adapters
//!
//! - `TavusProvider` - Tavus conversational video interface (CVI) API
//! - `MockConversationProvider` - Configurable mock for testing

mod mock_provider;
mod tavus_provider;

pub use mock_provider::MockConversationProvider;
pub use tavus_provider::{TavusConfig, TavusProvider, DEFAULT_BASE_URL};
