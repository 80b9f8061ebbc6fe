//! Generation request value objects

use crate::core::locale::Locale;
use crate::quiz::QuestionSet;
use serde::{Deserialize, Serialize};

/// What the caller wants generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    /// A complete eight-question quiz
    Questions,
    /// A personality profile derived from answered questions
    Analysis,
}

impl GenerationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationKind::Questions => "questions",
            GenerationKind::Analysis => "analysis",
        }
    }
}

impl std::fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A question paired with the option the user chose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPair {
    pub question: String,
    pub answer: String,
}

impl AnswerPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A request for generated content (Value Object)
///
/// Immutable once constructed. `Questions` requests never carry answers;
/// `Analysis` requests carry the ordered answer pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    kind: GenerationKind,
    locale: Locale,
    answers: Vec<AnswerPair>,
}

impl GenerationRequest {
    /// Request a fresh question set
    pub fn questions(locale: Locale) -> Self {
        Self {
            kind: GenerationKind::Questions,
            locale,
            answers: Vec::new(),
        }
    }

    /// Request an analysis of answered questions
    pub fn analysis(locale: Locale, answers: impl IntoIterator<Item = AnswerPair>) -> Self {
        Self {
            kind: GenerationKind::Analysis,
            locale,
            answers: answers.into_iter().collect(),
        }
    }

    /// Request an analysis by zipping a question set with the chosen options.
    ///
    /// Pairs are formed positionally; surplus answers or questions are ignored.
    pub fn analysis_from_answers(locale: Locale, questions: &QuestionSet, answers: &[String]) -> Self {
        Self::analysis(
            locale,
            questions
                .iter()
                .zip(answers)
                .map(|(q, a)| AnswerPair::new(q.text(), a.as_str())),
        )
    }

    pub fn kind(&self) -> GenerationKind {
        self.kind
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn answers(&self) -> &[AnswerPair] {
        &self.answers
    }

    /// All chosen options joined by spaces and lowercased
    pub fn answer_text(&self) -> String {
        self.answers
            .iter()
            .map(|pair| pair.answer.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
