//! Application layer for devtype
//!
//! This crate contains the generation use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CascadeSettings;
pub use ports::{
    provider_gateway::{ProviderError, ProviderGateway},
    status::{
        CancellationGuard, ChannelStatusNotifier, NoStatus, StatusEvent, StatusNotifier,
        StatusPhase,
    },
};
pub use use_cases::generate_content::{GenerateContentUseCase, GenerateError};
