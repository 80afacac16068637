//! Foundation module - Shared domain primitives.
//!
//! Contains the error types and the state machine trait that form the
//! vocabulary of the conversation domain.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
