//! Prompt domain
//!
//! Templates sent to providers for each kind of generation. The pipeline
//! treats rendered prompts as opaque text.

pub mod catalog;
pub mod template;

pub use catalog::{LocalePrompts, PromptCatalog};
pub use template::{ANSWERS_PLACEHOLDER, PromptPurpose, PromptTemplate, RenderedPrompt, format_answers};
