//! ConversationScript - what the remote agent should do in a session.

use super::DocumentRetrievalStrategy;

const COACHING_NAME: &str = "Public Speaking Coach meets with Rod";

const COACHING_GREETING: &str = "Hey Rod! I'm Chuck, a public speaking coach. \
What are you practicing today, and what kind of feedback would help most?";

const COACHING_CONTEXT: &str = "Run a structured two-take coaching session. \
First, ask what the user is practicing and what feedback they want. \
Then the user delivers a short intro; do not interrupt. \
Give one round of feedback (max 2 notes: one visual, one vocal) with no labels. \
Then the user retries; do not interrupt. \
After the retry, highlight what improved and end with encouragement. \
Do not ask for additional takes.";

/// Caller intent for a new conversation.
///
/// Empty strings are allowed and mean "let the remote service decide".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationScript {
    pub conversation_name: String,
    pub custom_greeting: String,
    pub conversational_context: String,
    pub document_retrieval_strategy: Option<DocumentRetrievalStrategy>,
}

impl ConversationScript {
    /// The two-take public speaking coaching session used by the demo.
    pub fn coaching_session() -> Self {
        Self {
            conversation_name: COACHING_NAME.to_string(),
            custom_greeting: COACHING_GREETING.to_string(),
            conversational_context: COACHING_CONTEXT.to_string(),
            document_retrieval_strategy: Some(DocumentRetrievalStrategy::Balanced),
        }
    }
}

impl Default for ConversationScript {
    fn default() -> Self {
        Self::coaching_session()
    }
}
