//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConversationProvider` - Remote service that creates video conversations

mod conversation_provider;

pub use conversation_provider::{ConversationError, ConversationProvider, ErrorKind, ProviderInfo};
