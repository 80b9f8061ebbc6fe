//! Composition root: wire configuration, HTTP gateway and use case.

use crate::config::FileConfig;
use crate::providers::HttpProviderGateway;
use devtype_application::GenerateContentUseCase;
use std::sync::Arc;
use tracing::info;

/// Build a ready-to-use generation pipeline from configuration.
///
/// API keys are read from the environment here, once.
pub fn build_pipeline(
    config: &FileConfig,
) -> Result<GenerateContentUseCase<HttpProviderGateway>, reqwest::Error> {
    let settings = config.cascade_settings();
    let gateway = Arc::new(HttpProviderGateway::new(settings)?);
    let registry = Arc::new(config.build_registry());
    info!("Provider cascade: {}", registry.names().join(" -> "));

    Ok(
        GenerateContentUseCase::new(gateway, registry, Arc::new(config.prompt_catalog()))
            .with_settings(settings),
    )
}
