//! Quiz content: questions and complete question sets.

pub mod question;

pub use question::{OPTIONS_PER_QUESTION, QUESTIONS_PER_SET, Question, QuestionSet};
