//! Mock Conversation Provider for testing.
//!
//! Provides a configurable implementation of the ConversationProvider port,
//! allowing tests to run without calling the real conversational video API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockConversationProvider::new()
//!     .with_session("c1", "https://example.com/c1");
//!
//! let result = provider.create_conversation(&request).await?;
//! assert_eq!(result.conversation_id(), "c1");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::conversation::{SessionRequest, SessionResult};
use crate::ports::{ConversationError, ConversationProvider, ProviderInfo};

/// Mock conversation provider for testing.
///
/// Responses are consumed in order. When the queue is empty every call
/// fails with a service error, so unexpected calls surface in assertions.
#[derive(Debug, Clone, Default)]
pub struct MockConversationProvider {
    responses: Arc<Mutex<VecDeque<Result<SessionResult, ConversationError>>>>,
    calls: Arc<Mutex<Vec<SessionRequest>>>,
}

impl MockConversationProvider {
    /// Creates a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful session with no reported status.
    pub fn with_session(self, conversation_id: &str, conversation_url: &str) -> Self {
        self.with_result(SessionResult::new(
            conversation_id,
            conversation_url,
            None,
            None,
        ))
    }

    /// Queues a successful result.
    pub fn with_result(self, result: SessionResult) -> Self {
        self.responses.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ConversationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<SessionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ConversationProvider for MockConversationProvider {
    async fn create_conversation(
        &self,
        request: &SessionRequest,
    ) -> Result<SessionResult, ConversationError> {
        self.calls.lock().unwrap().push(request.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ConversationError::service(500, "no mock response queued")))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "memory://mock")
    }
}
