//! Session launch configuration

use serde::Deserialize;

use crate::application::SessionSettings;
use crate::domain::conversation::MIN_PARTICIPANTS;

/// Settings applied to every launched conversation
///
/// Missing persona or replica ids do not fail loading; they are reported
/// when a session start is attempted.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionConfig {
    /// Tavus persona id
    #[serde(default)]
    pub persona_id: String,

    /// Tavus replica id
    #[serde(default)]
    pub replica_id: String,

    /// Knowledge-base document ids (comma-separated)
    pub document_ids: Option<String>,

    /// Require a meeting token to join
    #[serde(default)]
    pub require_auth: bool,

    /// Participant limit (raised to the service minimum if lower)
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,

    /// Create sessions in test mode
    #[serde(default)]
    pub test_mode: bool,

    /// Audio-only sessions
    #[serde(default)]
    pub audio_only: bool,

    /// Webhook for conversation events
    pub callback_url: Option<String>,

    /// Memory store ids (comma-separated)
    pub memory_stores: Option<String>,
}

impl SessionConfig {
    /// Get document ids as a vector, dropping blank entries
    pub fn document_id_list(&self) -> Vec<String> {
        parse_csv(self.document_ids.as_deref())
    }

    /// Get memory store ids as a vector, dropping blank entries
    pub fn memory_store_list(&self) -> Vec<String> {
        parse_csv(self.memory_stores.as_deref())
    }

    /// Check if both persona and replica ids are present
    pub fn is_launchable(&self) -> bool {
        !self.persona_id.trim().is_empty() && !self.replica_id.trim().is_empty()
    }

    /// Convert into the settings used by the start handler
    pub fn to_settings(&self) -> SessionSettings {
        SessionSettings {
            persona_id: self.persona_id.trim().to_string(),
            replica_id: self.replica_id.trim().to_string(),
            document_ids: self.document_id_list(),
            require_auth: self.require_auth,
            max_participants: self.max_participants,
            test_mode: self.test_mode,
            audio_only: self.audio_only,
            callback_url: self.callback_url.clone(),
            memory_stores: self.memory_store_list(),
        }
    }
}

fn parse_csv(csv: Option<&str>) -> Vec<String> {
    csv.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn default_max_participants() -> u32 {
    MIN_PARTICIPANTS
}
