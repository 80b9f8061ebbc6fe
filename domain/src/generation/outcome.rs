//! Generation outcome and per-provider attempt results

use crate::profile::PersonalityProfile;
use crate::quiz::QuestionSet;
use serde::{Deserialize, Serialize};

/// Label used when content came from the local fallback store
pub const FALLBACK_LABEL: &str = "Fallback";

/// Result of trying a single provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProviderAttemptResult<T = ()> {
    /// The availability probe failed
    Unavailable,
    /// The real request failed at the network or HTTP level
    TransportError { message: String },
    /// The response could not be turned into the expected shape
    ParseError { message: String, raw_excerpt: String },
    /// The provider produced valid content
    Success(T),
}

impl<T> ProviderAttemptResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ProviderAttemptResult::Success(_))
    }

    /// Map the success content, keeping failure variants untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProviderAttemptResult<U> {
        match self {
            ProviderAttemptResult::Unavailable => ProviderAttemptResult::Unavailable,
            ProviderAttemptResult::TransportError { message } => {
                ProviderAttemptResult::TransportError { message }
            }
            ProviderAttemptResult::ParseError {
                message,
                raw_excerpt,
            } => ProviderAttemptResult::ParseError {
                message,
                raw_excerpt,
            },
            ProviderAttemptResult::Success(content) => ProviderAttemptResult::Success(f(content)),
        }
    }
}

/// A recorded attempt against a named provider, content discarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAttempt {
    pub provider: String,
    #[serde(flatten)]
    pub result: ProviderAttemptResult,
}

impl ProviderAttempt {
    pub fn new<T>(provider: impl Into<String>, result: ProviderAttemptResult<T>) -> Self {
        Self {
            provider: provider.into(),
            result: result.map(|_| ()),
        }
    }
}

/// Which stage produced the final content.
///
/// Informational only; callers must not branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SourceLabel {
    Provider(String),
    Fallback,
}

impl SourceLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SourceLabel::Provider(name) => name,
            SourceLabel::Fallback => FALLBACK_LABEL,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SourceLabel::Fallback)
    }
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<SourceLabel> for String {
    fn from(label: SourceLabel) -> Self {
        label.as_str().to_string()
    }
}

impl From<String> for SourceLabel {
    fn from(label: String) -> Self {
        if label == FALLBACK_LABEL {
            SourceLabel::Fallback
        } else {
            SourceLabel::Provider(label)
        }
    }
}

/// Generated content of either kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedContent {
    Questions(QuestionSet),
    Profile(PersonalityProfile),
}

/// The final successful result of a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub content: GeneratedContent,
    pub source_label: SourceLabel,
    /// Every provider attempt in cascade order, for diagnostics
    pub attempts: Vec<ProviderAttempt>,
}

impl GenerationOutcome {
    pub fn new(content: GeneratedContent, source_label: SourceLabel) -> Self {
        Self {
            content,
            source_label,
            attempts: Vec::new(),
        }
    }

    pub fn with_attempts(mut self, attempts: Vec<ProviderAttempt>) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn questions(&self) -> Option<&QuestionSet> {
        match &self.content {
            GeneratedContent::Questions(set) => Some(set),
            GeneratedContent::Profile(_) => None,
        }
    }

    pub fn profile(&self) -> Option<&PersonalityProfile> {
        match &self.content {
            GeneratedContent::Profile(profile) => Some(profile),
            GeneratedContent::Questions(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_display() {
        assert_eq!(SourceLabel::Provider("Gemini".to_string()).to_string(), "Gemini");
        assert_eq!(SourceLabel::Fallback.to_string(), "Fallback");
    }

    #[test]
    fn test_source_label_serde_as_plain_string() {
        let json = serde_json::to_value(SourceLabel::Fallback).unwrap();
        assert_eq!(json, serde_json::json!("Fallback"));

        let label: SourceLabel = serde_json::from_value(serde_json::json!("DeepSeek")).unwrap();
        assert_eq!(label, SourceLabel::Provider("DeepSeek".to_string()));
    }

    #[test]
    fn test_attempt_discards_content() {
        let attempt = ProviderAttempt::new("Gemini", ProviderAttemptResult::Success(42));
        assert_eq!(attempt.result, ProviderAttemptResult::Success(()));
        assert!(attempt.result.is_success());
    }

    #[test]
    fn test_map_preserves_failures() {
        let failed: ProviderAttemptResult<u32> = ProviderAttemptResult::ParseError {
            message: "bad".to_string(),
            raw_excerpt: "{".to_string(),
        };
        assert_eq!(
            failed.map(|n| n + 1),
            ProviderAttemptResult::ParseError {
                message: "bad".to_string(),
                raw_excerpt: "{".to_string(),
            }
        );
    }

    #[test]
    fn test_attempt_serializes_flat() {
        let attempt = ProviderAttempt::new(
            "DeepSeek",
            ProviderAttemptResult::<()>::TransportError {
                message: "HTTP 500".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(attempt).unwrap(),
            serde_json::json!({"provider": "DeepSeek", "result": "transport_error", "message": "HTTP 500"})
        );
    }
}
