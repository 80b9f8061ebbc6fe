//! Provider cascade runner.
//!
//! Drives [`CascadeState`] across the registry for one prompt: probe,
//! request and parse each provider in priority order until one response
//! survives the parser. Every attempt is recorded and reported to the
//! status notifier.

use crate::config::CascadeSettings;
use crate::ports::provider_gateway::{ProviderError, ProviderGateway};
use crate::ports::status::{StatusEvent, StatusNotifier};
use crate::use_cases::generate_content::GenerateError;
use crate::use_cases::shared::{cancellable, check_cancelled};
use devtype_domain::extraction::ExtractError;
use devtype_domain::{
    CascadeEvent, CascadeState, DomainError, PromptPurpose, ProviderAttempt,
    ProviderAttemptResult, ProviderRegistry, RenderedPrompt,
};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Where a cascade run ended
pub(crate) struct CascadeRun<T> {
    /// `Success` or `Fallback`
    pub state: CascadeState,
    /// Winning provider name and its parsed content
    pub winner: Option<(String, T)>,
    pub attempts: Vec<ProviderAttempt>,
}

pub(crate) struct Cascade<'a, G: ProviderGateway + ?Sized> {
    pub gateway: &'a G,
    pub registry: &'a ProviderRegistry,
    pub settings: CascadeSettings,
    pub status: &'a dyn StatusNotifier,
    pub cancellation_token: &'a Option<CancellationToken>,
}

impl<G: ProviderGateway + ?Sized> Cascade<'_, G> {
    pub async fn run<T>(
        &self,
        purpose: PromptPurpose,
        prompt: &RenderedPrompt,
        parse: impl Fn(&str) -> Result<T, ExtractError>,
    ) -> Result<CascadeRun<T>, GenerateError> {
        let providers = self.registry.providers_in_priority_order();
        let mut attempts = Vec::new();
        let mut response: Option<String> = None;
        let mut state = self.advance(CascadeState::Init, CascadeEvent::Start)?;

        loop {
            check_cancelled(self.cancellation_token)?;

            if state == CascadeState::Fallback {
                info!("{} cascade exhausted after {} attempts", purpose.as_str(), attempts.len());
                self.status.notify(StatusEvent::falling_back());
                return Ok(CascadeRun {
                    state,
                    winner: None,
                    attempts,
                });
            }

            let provider = state
                .provider_index()
                .and_then(|i| providers.get(i))
                .ok_or_else(|| DomainError::InvalidTransition {
                    state: format!("{:?}", state),
                    event: "step".to_string(),
                })?;
            let name = provider.name();

            state = match state {
                CascadeState::Probe(_) => {
                    self.status.notify(StatusEvent::probing(name));
                    let probe = timeout(self.settings.probe_timeout, self.gateway.probe(provider));
                    let reachable = cancellable(self.cancellation_token, probe)
                        .await?
                        .unwrap_or(false);
                    self.status.notify(StatusEvent::probe_result(name, reachable));

                    if reachable {
                        self.advance(state, CascadeEvent::Reachable)?
                    } else {
                        warn!("Provider {} is unavailable", name);
                        self.status.notify(StatusEvent::attempt_failed(name, "unavailable"));
                        attempts.push(ProviderAttempt::new(
                            name,
                            ProviderAttemptResult::<()>::Unavailable,
                        ));
                        self.advance(state, CascadeEvent::Unreachable)?
                    }
                }
                CascadeState::Request(_) => {
                    self.status.notify(StatusEvent::requesting(name));
                    let request = timeout(
                        self.settings.request_timeout,
                        self.gateway.request(provider, prompt),
                    );
                    let result = cancellable(self.cancellation_token, request)
                        .await?
                        .unwrap_or(Err(ProviderError::Timeout(self.settings.request_timeout)));

                    match result {
                        Ok(text) => {
                            response = Some(text);
                            self.advance(state, CascadeEvent::Responded)?
                        }
                        Err(error) => {
                            warn!("Provider {} request failed: {}", name, error);
                            self.status.notify(StatusEvent::attempt_failed(name, error.to_string()));
                            attempts.push(ProviderAttempt::new(name, error.into_attempt()));
                            self.advance(state, CascadeEvent::RequestFailed)?
                        }
                    }
                }
                CascadeState::Parse(_) => {
                    self.status.notify(StatusEvent::parsing(name));
                    let text = response.take().unwrap_or_default();

                    match parse(&text) {
                        Ok(content) => {
                            self.status.notify(StatusEvent::succeeded(name));
                            attempts.push(ProviderAttempt::new(name, ProviderAttemptResult::Success(())));
                            let state = self.advance(state, CascadeEvent::Parsed)?;
                            return Ok(CascadeRun {
                                state,
                                winner: Some((name.to_string(), content)),
                                attempts,
                            });
                        }
                        Err(error) => {
                            warn!("Provider {} returned unusable {}: {}", name, purpose.as_str(), error);
                            self.status.notify(StatusEvent::attempt_failed(name, error.message.clone()));
                            attempts.push(ProviderAttempt::new(
                                name,
                                ProviderAttemptResult::<()>::ParseError {
                                    message: error.message,
                                    raw_excerpt: error.excerpt,
                                },
                            ));
                            self.advance(state, CascadeEvent::ParseFailed)?
                        }
                    }
                }
                other => {
                    return Err(DomainError::InvalidTransition {
                        state: format!("{:?}", other),
                        event: "step".to_string(),
                    }
                    .into());
                }
            };
        }
    }

    fn advance(&self, state: CascadeState, event: CascadeEvent) -> Result<CascadeState, GenerateError> {
        let next = state.advance(event, self.registry.len())?;
        debug!("Cascade {:?} --{:?}--> {:?}", state, event, next);
        Ok(next)
    }
}
