//! Prompt templates and their rendered form

use crate::generation::{AnswerPair, GenerationKind};
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the numbered question/answer list
pub const ANSWERS_PLACEHOLDER: &str = "{answers}";

/// What a prompt asks the provider to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptPurpose {
    /// A list of quiz questions
    Questions,
    /// A personality profile for the user's answers
    Analysis,
    /// A catalog of candidate profiles for the fallback matcher
    Catalog,
}

impl PromptPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptPurpose::Questions => "questions",
            PromptPurpose::Analysis => "analysis",
            PromptPurpose::Catalog => "catalog",
        }
    }
}

impl From<GenerationKind> for PromptPurpose {
    fn from(kind: GenerationKind) -> Self {
        match kind {
            GenerationKind::Questions => PromptPurpose::Questions,
            GenerationKind::Analysis => PromptPurpose::Analysis,
        }
    }
}

/// A configurable prompt with its sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl PromptTemplate {
    pub fn new(user: impl Into<String>, temperature: f64, max_tokens: u32) -> Self {
        Self {
            system: None,
            user: user.into(),
            temperature,
            max_tokens,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Substitute [`ANSWERS_PLACEHOLDER`] and freeze the result
    pub fn render(&self, answers: &[AnswerPair]) -> RenderedPrompt {
        let user = if self.user.contains(ANSWERS_PLACEHOLDER) {
            self.user.replace(ANSWERS_PLACEHOLDER, &format_answers(answers))
        } else {
            self.user.clone()
        };

        RenderedPrompt {
            system: self.system.clone(),
            user,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// A prompt ready to send. Providers treat the text as opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub system: Option<String>,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// `1. question\n   Answer: answer` lines, one per pair
pub fn format_answers(answers: &[AnswerPair]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, pair)| format!("{}. {}\n   Answer: {}", i + 1, pair.question, pair.answer))
        .collect::<Vec<_>>()
        .join("\n")
}
