//! LaunchStatus enum for tracking a single session-creation attempt.

use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle of one create-conversation call.
///
/// `Idle -> Sending -> Succeeded | Failed`. Both outcomes are terminal:
/// an attempt is never resumed or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl StateMachine for LaunchStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use LaunchStatus::*;
        matches!(
            (self, target),
            (Idle, Sending) | (Sending, Succeeded) | (Sending, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LaunchStatus::*;
        match self {
            Idle => vec![Sending],
            Sending => vec![Succeeded, Failed],
            Succeeded | Failed => vec![],
        }
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LaunchStatus::Idle => "idle",
            LaunchStatus::Sending => "sending",
            LaunchStatus::Succeeded => "succeeded",
            LaunchStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(LaunchStatus::default(), LaunchStatus::Idle);
    }

    #[test]
    fn idle_only_moves_to_sending() {
        assert!(LaunchStatus::Idle.can_transition_to(&LaunchStatus::Sending));
        assert!(!LaunchStatus::Idle.can_transition_to(&LaunchStatus::Succeeded));
        assert!(!LaunchStatus::Idle.can_transition_to(&LaunchStatus::Failed));
    }

    #[test]
    fn sending_resolves_to_either_outcome() {
        assert_eq!(
            LaunchStatus::Sending.transition_to(LaunchStatus::Succeeded),
            Ok(LaunchStatus::Succeeded)
        );
        assert_eq!(
            LaunchStatus::Sending.transition_to(LaunchStatus::Failed),
            Ok(LaunchStatus::Failed)
        );
    }

    #[test]
    fn outcomes_are_terminal() {
        assert!(LaunchStatus::Succeeded.is_terminal());
        assert!(LaunchStatus::Failed.is_terminal());
        assert!(LaunchStatus::Failed.transition_to(LaunchStatus::Sending).is_err());
    }

    #[test]
    fn displays_snake_case() {
        assert_eq!(LaunchStatus::Sending.to_string(), "sending");
    }
}
