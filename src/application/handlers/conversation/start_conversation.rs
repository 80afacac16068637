//! StartConversationHandler - Command handler for launching a video session.
//!
//! Combines the caller's script with process-wide session settings into a
//! validated `SessionRequest`, logs a preview of the payload, and hands it to
//! the conversation provider. Exactly one provider call per command.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::domain::conversation::{
    ConversationScript, LaunchStatus, SessionRequest, SessionResult, MIN_PARTICIPANTS,
};
use crate::domain::foundation::StateMachine;
use crate::ports::{ConversationError, ConversationProvider};

/// Process-wide settings applied to every launched session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub persona_id: String,
    pub replica_id: String,
    /// Knowledge-base documents, in priority order.
    pub document_ids: Vec<String>,
    pub require_auth: bool,
    pub max_participants: u32,
    pub test_mode: bool,
    pub audio_only: bool,
    pub callback_url: Option<String>,
    pub memory_stores: Vec<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            persona_id: String::new(),
            replica_id: String::new(),
            document_ids: Vec::new(),
            require_auth: false,
            max_participants: MIN_PARTICIPANTS,
            test_mode: false,
            audio_only: false,
            callback_url: None,
            memory_stores: Vec::new(),
        }
    }
}

/// Command to start a new conversation.
#[derive(Debug, Clone)]
pub struct StartConversationCommand {
    pub script: ConversationScript,
}

/// Handler for starting conversations.
pub struct StartConversationHandler {
    settings: SessionSettings,
    provider: Arc<dyn ConversationProvider>,
}

impl StartConversationHandler {
    pub fn new(settings: SessionSettings, provider: Arc<dyn ConversationProvider>) -> Self {
        Self { settings, provider }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Assembles the request for a script.
    ///
    /// # Errors
    ///
    /// Returns `ConversationError::Configuration` when the persona or replica
    /// id is missing.
    pub fn build_request(
        &self,
        script: &ConversationScript,
    ) -> Result<SessionRequest, ConversationError> {
        let settings = &self.settings;

        let mut builder = SessionRequest::builder(&settings.persona_id, &settings.replica_id)
            .with_conversation_name(&script.conversation_name)
            .with_custom_greeting(&script.custom_greeting)
            .with_conversational_context(&script.conversational_context)
            .with_document_ids(settings.document_ids.iter().cloned())
            .with_require_auth(settings.require_auth)
            .with_max_participants(settings.max_participants)
            .with_test_mode(settings.test_mode)
            .with_audio_only(settings.audio_only)
            .with_memory_stores(settings.memory_stores.iter().cloned());

        if let Some(strategy) = script.document_retrieval_strategy {
            builder = builder.with_document_retrieval_strategy(strategy);
        }
        if let Some(url) = &settings.callback_url {
            builder = builder.with_callback_url(url);
        }

        Ok(builder.build()?)
    }

    pub async fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<SessionResult, ConversationError> {
        let span = tracing::info_span!("start_conversation", launch_id = %Uuid::new_v4());

        async move {
            let mut attempt = LaunchAttempt::default();

            // 1. Build and validate the request (no network on failure)
            let request = self.build_request(&cmd.script)?;
            tracing::info!(payload = %request.preview(), "Payload preview");

            // 2. Single call to the provider
            attempt.advance(LaunchStatus::Sending);
            let outcome = self.provider.create_conversation(&request).await;

            // 3. Record the terminal state
            match &outcome {
                Ok(result) => {
                    attempt.advance(LaunchStatus::Succeeded);
                    tracing::info!(
                        conversation_id = result.conversation_id(),
                        "Conversation started"
                    );
                }
                Err(e) => {
                    attempt.advance(LaunchStatus::Failed);
                    tracing::warn!(error = %e, kind = ?e.kind(), "Conversation start failed");
                }
            }

            outcome
        }
        .instrument(span)
        .await
    }
}

/// Tracks the lifecycle of one launch for logging.
#[derive(Debug, Default)]
struct LaunchAttempt {
    status: LaunchStatus,
}

impl LaunchAttempt {
    fn advance(&mut self, next: LaunchStatus) {
        match self.status.transition_to(next) {
            Ok(status) => {
                tracing::debug!(from = %self.status, to = %status, "Launch status changed");
                self.status = status;
            }
            Err(e) => tracing::warn!(error = %e, "Ignored invalid launch transition"),
        }
    }
}
