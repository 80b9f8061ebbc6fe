//! Provider gateway port
//!
//! Defines how the application layer talks to generative-text providers.
//! Adapters (HTTP, test doubles) live outside this crate.

use async_trait::async_trait;
use devtype_domain::{ProviderAttemptResult, ProviderDescriptor, RenderedPrompt};
use std::time::Duration;
use thiserror::Error;

/// Errors a provider request can end with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected response envelope: {message}")]
    Envelope { message: String, excerpt: String },
}

impl ProviderError {
    /// Classify as an attempt result: envelope problems are parse errors,
    /// everything else is a transport error
    pub fn into_attempt(self) -> ProviderAttemptResult {
        match self {
            ProviderError::Envelope { message, excerpt } => ProviderAttemptResult::ParseError {
                message,
                raw_excerpt: excerpt,
            },
            other => ProviderAttemptResult::TransportError {
                message: other.to_string(),
            },
        }
    }
}

/// Gateway for provider communication
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Lightweight reachability check. Never fails: any transport problem
    /// means `false`.
    async fn probe(&self, provider: &ProviderDescriptor) -> bool;

    /// Send the real generation request and unwrap the provider envelope
    /// into raw text. The text itself is not interpreted.
    async fn request(
        &self,
        provider: &ProviderDescriptor,
        prompt: &RenderedPrompt,
    ) -> Result<String, ProviderError>;
}
