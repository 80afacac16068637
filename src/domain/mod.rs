//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait)
//! - `conversation` - Session requests, results and launch lifecycle

pub mod conversation;
pub mod foundation;
