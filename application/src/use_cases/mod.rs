//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub(crate) mod cascade;
pub mod generate_content;
pub(crate) mod shared;
