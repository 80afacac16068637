//! Conversation domain - requests for, and results of, remote video sessions.
//!
//! # Components
//!
//! - `SessionRequest` / `SessionRequestBuilder` - validated outbound payload
//! - `SessionResult` - the created session as reported by the remote service
//! - `ConversationScript` - caller intent (name, greeting, agent instructions)
//! - `DocumentRetrievalStrategy` - knowledge-base latency/quality trade-off
//! - `LaunchStatus` - lifecycle of a single creation attempt

mod launch_status;
mod request;
mod result;
mod retrieval_strategy;
mod script;

pub use launch_status::LaunchStatus;
pub use request::{SessionRequest, SessionRequestBuilder, MIN_PARTICIPANTS};
pub use result::{SessionResult, UNKNOWN_STATUS};
pub use retrieval_strategy::DocumentRetrievalStrategy;
pub use script::ConversationScript;
