//! Infrastructure layer for devtype
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP provider gateway, configuration
//! file loading, and logging setup.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileAuthMode, FileConfig,
    FileProviderConfig, FileTimeoutsConfig,
};
pub use logging::init_tracing;
pub use pipeline::build_pipeline;
pub use providers::HttpProviderGateway;
