//! SessionRequest - validated description of a conversation to create.
//!
//! A `SessionRequest` can only be obtained through [`SessionRequestBuilder`],
//! which enforces the invariants the remote API relies on:
//!
//! - `persona_id` and `replica_id` are non-empty
//! - `max_participants` is at least [`MIN_PARTICIPANTS`]
//! - optional fields are either absent or carry a non-empty value
//!
//! Absent fields are omitted from the serialized payload (never `null`) so
//! the remote service applies its own defaults.

use serde::Serialize;
use serde_json::{Map, Value};

use super::DocumentRetrievalStrategy;
use crate::domain::foundation::ValidationError;

/// Smallest participant count the remote service accepts.
pub const MIN_PARTICIPANTS: u32 = 2;

/// Outbound configuration for a conversation session.
///
/// Serializes to the snake_case wire format of `POST /conversations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRequest {
    persona_id: String,
    replica_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversational_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_retrieval_strategy: Option<DocumentRetrievalStrategy>,
    require_auth: bool,
    max_participants: u32,
    test_mode: bool,
    audio_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory_stores: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Map<String, Value>>,
}

impl SessionRequest {
    /// Starts building a request for the given persona and replica.
    pub fn builder(
        persona_id: impl Into<String>,
        replica_id: impl Into<String>,
    ) -> SessionRequestBuilder {
        SessionRequestBuilder::new(persona_id, replica_id)
    }

    pub fn persona_id(&self) -> &str {
        &self.persona_id
    }

    pub fn replica_id(&self) -> &str {
        &self.replica_id
    }

    pub fn conversation_name(&self) -> Option<&str> {
        self.conversation_name.as_deref()
    }

    pub fn conversational_context(&self) -> Option<&str> {
        self.conversational_context.as_deref()
    }

    pub fn custom_greeting(&self) -> Option<&str> {
        self.custom_greeting.as_deref()
    }

    /// Knowledge-base documents, in the order they were supplied.
    pub fn document_ids(&self) -> Option<&[String]> {
        self.document_ids.as_deref()
    }

    pub fn document_retrieval_strategy(&self) -> Option<DocumentRetrievalStrategy> {
        self.document_retrieval_strategy
    }

    pub fn require_auth(&self) -> bool {
        self.require_auth
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn audio_only(&self) -> bool {
        self.audio_only
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn memory_stores(&self) -> Option<&[String]> {
        self.memory_stores.as_deref()
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref()
    }

    /// Pretty-printed JSON payload, for operator logs.
    ///
    /// Never fails: a serialization problem is rendered into the preview text.
    pub fn preview(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("<payload preview unavailable: {}>", e))
    }
}

/// Builder for [`SessionRequest`].
#[derive(Debug, Clone)]
pub struct SessionRequestBuilder {
    persona_id: String,
    replica_id: String,
    conversation_name: Option<String>,
    conversational_context: Option<String>,
    custom_greeting: Option<String>,
    document_ids: Vec<String>,
    document_retrieval_strategy: Option<DocumentRetrievalStrategy>,
    require_auth: bool,
    max_participants: u32,
    test_mode: bool,
    audio_only: bool,
    callback_url: Option<String>,
    memory_stores: Vec<String>,
    properties: Map<String, Value>,
}

impl SessionRequestBuilder {
    /// Creates a builder with the remote service's defaults.
    pub fn new(persona_id: impl Into<String>, replica_id: impl Into<String>) -> Self {
        Self {
            persona_id: persona_id.into(),
            replica_id: replica_id.into(),
            conversation_name: None,
            conversational_context: None,
            custom_greeting: None,
            document_ids: Vec::new(),
            document_retrieval_strategy: None,
            require_auth: false,
            max_participants: MIN_PARTICIPANTS,
            test_mode: false,
            audio_only: false,
            callback_url: None,
            memory_stores: Vec::new(),
            properties: Map::new(),
        }
    }

    pub fn with_conversation_name(mut self, name: impl Into<String>) -> Self {
        self.conversation_name = Some(name.into());
        self
    }

    /// Sets free-form instructions for the remote agent.
    pub fn with_conversational_context(mut self, context: impl Into<String>) -> Self {
        self.conversational_context = Some(context.into());
        self
    }

    pub fn with_custom_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.custom_greeting = Some(greeting.into());
        self
    }

    /// Sets the knowledge-base documents. Order is preserved.
    pub fn with_document_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_document_retrieval_strategy(mut self, strategy: DocumentRetrievalStrategy) -> Self {
        self.document_retrieval_strategy = Some(strategy);
        self
    }

    pub fn with_require_auth(mut self, require_auth: bool) -> Self {
        self.require_auth = require_auth;
        self
    }

    /// Sets the participant limit. Values below [`MIN_PARTICIPANTS`] are raised to it.
    pub fn with_max_participants(mut self, max_participants: u32) -> Self {
        self.max_participants = max_participants;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_audio_only(mut self, audio_only: bool) -> Self {
        self.audio_only = audio_only;
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_memory_stores<I, S>(mut self, stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.memory_stores = stores.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single forward-compatible option.
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Replaces all forward-compatible options.
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Validates and assembles the request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` when `persona_id` or
    /// `replica_id` is empty or whitespace.
    pub fn build(self) -> Result<SessionRequest, ValidationError> {
        if self.persona_id.trim().is_empty() {
            return Err(ValidationError::empty_field("persona_id"));
        }
        if self.replica_id.trim().is_empty() {
            return Err(ValidationError::empty_field("replica_id"));
        }

        Ok(SessionRequest {
            persona_id: self.persona_id,
            replica_id: self.replica_id,
            conversation_name: non_empty(self.conversation_name),
            conversational_context: non_empty(self.conversational_context),
            custom_greeting: non_empty(self.custom_greeting),
            document_ids: non_empty_list(self.document_ids),
            document_retrieval_strategy: self.document_retrieval_strategy,
            require_auth: self.require_auth,
            max_participants: self.max_participants.max(MIN_PARTICIPANTS),
            test_mode: self.test_mode,
            audio_only: self.audio_only,
            callback_url: non_empty(self.callback_url),
            memory_stores: non_empty_list(self.memory_stores),
            properties: if self.properties.is_empty() {
                None
            } else {
                Some(self.properties)
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_list(values: Vec<String>) -> Option<Vec<String>> {
    let values: Vec<String> = values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
