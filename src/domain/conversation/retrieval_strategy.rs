//! DocumentRetrievalStrategy enum for tuning knowledge-base lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade-off the remote service makes between latency and retrieval quality
/// when consulting the conversation's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentRetrievalStrategy {
    Speed,
    #[default]
    Balanced,
    Quality,
}

impl DocumentRetrievalStrategy {
    /// Wire value sent to the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentRetrievalStrategy::Speed => "speed",
            DocumentRetrievalStrategy::Balanced => "balanced",
            DocumentRetrievalStrategy::Quality => "quality",
        }
    }
}

impl fmt::Display for DocumentRetrievalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_balanced() {
        assert_eq!(
            DocumentRetrievalStrategy::default(),
            DocumentRetrievalStrategy::Balanced
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&DocumentRetrievalStrategy::Quality).unwrap();
        assert_eq!(json, "\"quality\"");
    }
}
