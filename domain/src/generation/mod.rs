//! Generation requests, outcomes and the provider cascade state machine.

pub mod cascade;
pub mod outcome;
pub mod request;

pub use cascade::{CascadeEvent, CascadeState};
pub use outcome::{
    FALLBACK_LABEL, GeneratedContent, GenerationOutcome, ProviderAttempt, ProviderAttemptResult,
    SourceLabel,
};
pub use request::{AnswerPair, GenerationKind, GenerationRequest};
