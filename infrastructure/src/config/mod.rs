//! Configuration file loading for devtype
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEVTYPE_*` environment variables
//! 2. Explicitly passed config file
//! 3. Project root: `./devtype.toml`
//! 4. Global: `~/.config/devtype/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAuthMode, FileConfig, FileLocalePrompts, FilePromptsConfig,
    FileProviderConfig, FileTimeoutsConfig,
};
pub use loader::ConfigLoader;

use thiserror::Error;

/// Errors raised while producing a usable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}
