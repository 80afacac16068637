//! Conversation script configuration

use serde::Deserialize;

use crate::domain::conversation::{ConversationScript, DocumentRetrievalStrategy};

/// Overrides for the conversation script
///
/// Unset values fall back to the built-in coaching session.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScriptConfig {
    pub conversation_name: Option<String>,
    pub custom_greeting: Option<String>,
    pub conversational_context: Option<String>,
    pub document_retrieval_strategy: Option<DocumentRetrievalStrategy>,
}

impl ScriptConfig {
    /// Resolve the script to send with every session
    pub fn to_script(&self) -> ConversationScript {
        let defaults = ConversationScript::coaching_session();
        ConversationScript {
            conversation_name: self
                .conversation_name
                .clone()
                .unwrap_or(defaults.conversation_name),
            custom_greeting: self
                .custom_greeting
                .clone()
                .unwrap_or(defaults.custom_greeting),
            conversational_context: self
                .conversational_context
                .clone()
                .unwrap_or(defaults.conversational_context),
            document_retrieval_strategy: self
                .document_retrieval_strategy
                .or(defaults.document_retrieval_strategy),
        }
    }
}
