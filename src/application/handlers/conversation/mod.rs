//! Conversation command handlers.

mod start_conversation;

pub use start_conversation::{
    SessionSettings, StartConversationCommand, StartConversationHandler,
};
