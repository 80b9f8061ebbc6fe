//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod prompts;
mod providers;
mod timeouts;

pub use prompts::{FileLocalePrompts, FilePromptsConfig};
pub use providers::{FileAuthMode, FileProviderConfig};
pub use timeouts::FileTimeoutsConfig;

use devtype_application::CascadeSettings;
use devtype_domain::{FALLBACK_LABEL, PromptCatalog, ProviderRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeouts.{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("provider name cannot be empty")]
    EmptyProviderName,

    #[error("provider name {0:?} is reserved for fallback content")]
    ReservedProviderName(String),

    #[error("duplicate provider name: {0}")]
    DuplicateProvider(String),

    #[error("provider {0} has an empty endpoint")]
    EmptyEndpoint(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider cascade, tried in priority order
    pub providers: Vec<FileProviderConfig>,
    /// Probe and request timeouts
    pub timeouts: FileTimeoutsConfig,
    /// Prompt overrides per locale
    pub prompts: FilePromptsConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            providers: vec![FileProviderConfig::gemini(), FileProviderConfig::deepseek()],
            timeouts: FileTimeoutsConfig::default(),
            prompts: FilePromptsConfig::default(),
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeouts.probe_secs == 0 {
            return Err(ConfigValidationError::ZeroTimeout("probe_secs"));
        }
        if self.timeouts.request_secs == 0 {
            return Err(ConfigValidationError::ZeroTimeout("request_secs"));
        }

        let mut seen = HashSet::new();
        for provider in &self.providers {
            if provider.name.trim().is_empty() {
                return Err(ConfigValidationError::EmptyProviderName);
            }
            if provider.name.trim().eq_ignore_ascii_case(FALLBACK_LABEL) {
                return Err(ConfigValidationError::ReservedProviderName(provider.name.clone()));
            }
            if !seen.insert(provider.name.as_str()) {
                return Err(ConfigValidationError::DuplicateProvider(provider.name.clone()));
            }
            if provider.endpoint.trim().is_empty() {
                return Err(ConfigValidationError::EmptyEndpoint(provider.name.clone()));
            }
        }
        Ok(())
    }

    /// Build the registry, reading API keys from the process environment
    pub fn build_registry(&self) -> ProviderRegistry {
        self.build_registry_with(&|var| std::env::var(var).ok())
    }

    /// Build the registry with a custom environment lookup
    pub fn build_registry_with(&self, resolve_env: &dyn Fn(&str) -> Option<String>) -> ProviderRegistry {
        ProviderRegistry::new(
            self.providers
                .iter()
                .map(|provider| provider.to_descriptor(resolve_env))
                .collect(),
        )
    }

    pub fn cascade_settings(&self) -> CascadeSettings {
        self.timeouts.to_settings()
    }

    pub fn prompt_catalog(&self) -> PromptCatalog {
        self.prompts.to_catalog()
    }
}
