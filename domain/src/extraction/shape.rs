//! Shape normalization: extracted JSON values into domain entities

use super::ExtractError;
use super::extractor::extract_json_array;
use crate::profile::PersonalityProfile;
use crate::quiz::{Question, QuestionSet};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a question list and normalize it to a complete [`QuestionSet`].
///
/// Malformed entries are discarded. The remainder is truncated to eight and
/// padded in order from the head of `padding`. A response without a single
/// valid question is an error.
pub fn questions_from_text(text: &str, padding: &QuestionSet) -> Result<QuestionSet, ExtractError> {
    let values = extract_json_array(text)?;
    let questions: Vec<Question> = valid_entries(values);
    if questions.is_empty() {
        return Err(ExtractError::new("response contains no valid questions", text));
    }
    Ok(QuestionSet::fill_from(questions, padding))
}

/// Parse a single personality profile. Every field is required.
pub fn profile_from_text(text: &str) -> Result<PersonalityProfile, ExtractError> {
    let first = extract_json_array(text)?
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::new("response contains no profile", text))?;
    serde_json::from_value(first)
        .map_err(|e| ExtractError::new(format!("invalid profile: {}", e), text))
}

/// Parse a catalog of candidate profiles, keeping the valid ones in order
pub fn catalog_from_text(text: &str) -> Result<Vec<PersonalityProfile>, ExtractError> {
    let profiles: Vec<PersonalityProfile> = valid_entries(extract_json_array(text)?);
    if profiles.is_empty() {
        return Err(ExtractError::new("catalog contains no valid profiles", text));
    }
    Ok(profiles)
}

fn valid_entries<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}
