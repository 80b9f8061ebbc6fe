//! Application-level configuration.
//!
//! - [`CascadeSettings`]: probe and request timeouts for the provider cascade

pub mod cascade_settings;

pub use cascade_settings::CascadeSettings;
