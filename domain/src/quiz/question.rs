//! Question and QuestionSet value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of options every question carries
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Number of questions in a complete quiz
pub const QUESTIONS_PER_SET: usize = 8;

/// Wire shape shared by providers and callers:
/// `{"question": "...", "options": ["...", "...", "...", "..."]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
}

/// A multiple-choice quiz question (Value Object)
///
/// Always has non-empty text and exactly [`OPTIONS_PER_QUESTION`] options.
/// Deserialization enforces the same invariant as [`Question::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    text: String,
    options: [String; OPTIONS_PER_QUESTION],
}

impl Question {
    /// Create a question, validating text and option count
    pub fn try_new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text is empty".to_string(),
            ));
        }

        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(DomainError::InvalidQuestion(format!(
                "empty option in \"{}\"",
                text
            )));
        }

        let count = options.len();
        let options: [String; OPTIONS_PER_QUESTION] = options.try_into().map_err(|_| {
            DomainError::InvalidQuestion(format!(
                "expected {} options, got {}",
                OPTIONS_PER_QUESTION, count
            ))
        })?;

        Ok(Self { text, options })
    }

    /// Build a question from compile-time bank data
    pub(crate) fn from_static(text: &'static str, options: [&'static str; OPTIONS_PER_QUESTION]) -> Self {
        Self {
            text: text.to_string(),
            options: options.map(str::to_string),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::try_new(record.question, record.options)
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            question: question.text,
            options: question.options.into(),
        }
    }
}

/// An ordered quiz of exactly [`QUESTIONS_PER_SET`] questions (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a set from exactly [`QUESTIONS_PER_SET`] questions
    pub fn try_new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.len() != QUESTIONS_PER_SET {
            return Err(DomainError::QuestionCount {
                expected: QUESTIONS_PER_SET,
                actual: questions.len(),
            });
        }
        Ok(Self { questions })
    }

    pub(crate) fn from_array(questions: [Question; QUESTIONS_PER_SET]) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    /// Build a complete set from a partial or oversized list.
    ///
    /// Keeps the first [`QUESTIONS_PER_SET`] questions and, when fewer were
    /// supplied, appends questions from the head of `padding` in order.
    pub fn fill_from(mut questions: Vec<Question>, padding: &QuestionSet) -> Self {
        questions.truncate(QUESTIONS_PER_SET);
        let missing = QUESTIONS_PER_SET - questions.len();
        questions.extend(padding.questions.iter().take(missing).cloned());
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = DomainError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        QuestionSet::try_new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(n: usize) -> Question {
        Question::try_new(format!("Q{}", n), ["a", "b", "c", "d"]).unwrap()
    }

    fn set(prefix: &str) -> QuestionSet {
        QuestionSet::try_new(
            (0..QUESTIONS_PER_SET)
                .map(|i| Question::try_new(format!("{}{}", prefix, i), ["a", "b", "c", "d"]).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_question_requires_four_options() {
        let err = Question::try_new("Pick one", ["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidQuestion("expected 4 options, got 3".to_string())
        );
        assert!(Question::try_new("Pick one", ["a", "b", "c", "d", "e"]).is_err());
    }

    #[test]
    fn test_question_rejects_blank_text_and_options() {
        assert!(Question::try_new("  ", ["a", "b", "c", "d"]).is_err());
        assert!(Question::try_new("Pick", ["a", "", "c", "d"]).is_err());
    }

    #[test]
    fn test_question_deserializes_provider_shape() {
        let json = serde_json::json!({
            "question": "🐛 What's your debugging approach?",
            "options": ["Console.log everything", "Step through with debugger", "Google the error", "Ask ChatGPT"]
        });
        let q: Question = serde_json::from_value(json).unwrap();
        assert_eq!(q.text(), "🐛 What's your debugging approach?");
        assert_eq!(q.options()[3], "Ask ChatGPT");
    }

    #[test]
    fn test_question_deserialize_rejects_wrong_option_count() {
        let json = serde_json::json!({"question": "Q", "options": ["a", "b"]});
        assert!(serde_json::from_value::<Question>(json).is_err());
    }

    #[test]
    fn test_question_serializes_provider_shape() {
        let value = serde_json::to_value(question(1)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"question": "Q1", "options": ["a", "b", "c", "d"]})
        );
    }

    #[test]
    fn test_set_requires_exactly_eight() {
        let err = QuestionSet::try_new(vec![question(1)]).unwrap_err();
        assert_eq!(
            err,
            DomainError::QuestionCount {
                expected: 8,
                actual: 1
            }
        );
    }

    #[test]
    fn test_fill_from_pads_in_bank_order() {
        let padding = set("bank-");
        let filled = QuestionSet::fill_from(vec![question(1), question(2), question(3)], &padding);

        assert_eq!(filled.len(), QUESTIONS_PER_SET);
        assert_eq!(filled.questions()[0].text(), "Q1");
        assert_eq!(filled.questions()[2].text(), "Q3");
        assert_eq!(filled.questions()[3].text(), "bank-0");
        assert_eq!(filled.questions()[7].text(), "bank-4");
    }

    #[test]
    fn test_fill_from_truncates_oversized() {
        let padding = set("bank-");
        let many: Vec<Question> = (0..12).map(question).collect();
        let filled = QuestionSet::fill_from(many, &padding);

        assert_eq!(filled.len(), QUESTIONS_PER_SET);
        assert_eq!(filled.questions()[7].text(), "Q7");
    }

    #[test]
    fn test_fill_from_empty_returns_padding() {
        let padding = set("bank-");
        assert_eq!(QuestionSet::fill_from(Vec::new(), &padding), padding);
    }
}
