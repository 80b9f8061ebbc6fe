//! Developer personality profiles.

pub mod entities;

pub use entities::{MAX_SUITABLE_ROLES, MIN_SUITABLE_ROLES, PersonalityProfile};
