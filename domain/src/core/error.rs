//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Question set must contain exactly {expected} questions, got {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("Invalid personality profile: {0}")]
    InvalidProfile(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid cascade transition: {event} while {state}")]
    InvalidTransition { state: String, event: String },
}

impl DomainError {
    /// Check if this error is a state machine contract violation
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}
