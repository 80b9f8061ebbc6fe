//! Domain layer for devtype
//!
//! This crate contains the entities, value objects and pure logic of the
//! generation pipeline. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Cascade
//!
//! A generation request walks the provider registry in priority order:
//! probe, request, parse. The first provider whose response survives
//! extraction wins; every failure advances to the next provider.
//!
//! ## Fallback
//!
//! When the registry is exhausted the fallback store answers instead:
//! the locale's static question bank, or a keyword-matched profile.
//! The fallback path cannot fail, so callers always get a result.

pub mod core;
pub mod extraction;
pub mod fallback;
pub mod generation;
pub mod profile;
pub mod prompt;
pub mod provider;
pub mod quiz;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, locale::Locale};
pub use extraction::{
    ExtractError, catalog_from_text, extract_json_array, profile_from_text, questions_from_text,
};
pub use fallback::{generic_profile, question_bank, select_profile};
pub use generation::{
    AnswerPair, CascadeEvent, CascadeState, FALLBACK_LABEL, GeneratedContent, GenerationKind,
    GenerationOutcome, GenerationRequest, ProviderAttempt, ProviderAttemptResult, SourceLabel,
};
pub use profile::PersonalityProfile;
pub use prompt::{PromptCatalog, PromptPurpose, PromptTemplate, RenderedPrompt};
pub use provider::{AuthMode, ProviderDescriptor, ProviderProtocol, ProviderRegistry};
pub use quiz::{Question, QuestionSet};
