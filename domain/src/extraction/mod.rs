//! Structured-data recovery from provider text.
//!
//! Providers return prose, fenced blocks, and near-JSON. This module turns
//! that text into validated domain values or an [`ExtractError`] carrying a
//! bounded excerpt of the offending text.

pub mod extractor;
pub mod fence;
pub mod repair;
pub mod shape;

use crate::util::excerpt;
use thiserror::Error;

pub use extractor::{
    EXCERPT_CHARS, extract_json_array, locate_object_array, salvage_truncated_array,
};
pub use fence::{extract_fenced_block, unfence};
pub use repair::{REPAIR_RULES, RepairRule, apply_repairs};
pub use shape::{catalog_from_text, profile_from_text, questions_from_text};

/// Provider text could not be turned into the expected shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExtractError {
    pub message: String,
    /// First [`EXCERPT_CHARS`] characters of the offending text
    pub excerpt: String,
}

impl ExtractError {
    pub fn new(message: impl Into<String>, text: &str) -> Self {
        Self {
            message: message.into(),
            excerpt: excerpt(text, EXCERPT_CHARS).to_string(),
        }
    }
}
