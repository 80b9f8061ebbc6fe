//! Generate Content use case
//!
//! The single inbound entry point of the pipeline. Runs the provider
//! cascade for a [`GenerationRequest`] and always produces a complete
//! [`GenerationOutcome`]: provider content when some provider succeeds,
//! fallback content otherwise.
//!
//! Analysis requests have a two-stage fallback: a second cascade asks the
//! providers for a catalog of candidate profiles, and the deterministic
//! matcher picks the best one for the user's answers. If that cascade is
//! exhausted too, the locale's generic profile is used.

use crate::config::CascadeSettings;
use crate::ports::provider_gateway::ProviderGateway;
use crate::ports::status::{CancellationGuard, NoStatus, StatusNotifier};
use crate::use_cases::cascade::{Cascade, CascadeRun};
use crate::use_cases::shared::check_cancelled;
use devtype_domain::{
    CascadeEvent, CascadeState, DomainError, GeneratedContent, GenerationKind,
    GenerationOutcome, GenerationRequest, PersonalityProfile, PromptCatalog, PromptPurpose,
    ProviderRegistry, SourceLabel, catalog_from_text, profile_from_text, question_bank,
    questions_from_text, select_profile,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can end a generation request.
///
/// Provider failures never surface here; they are recovered by the
/// cascade. Only cancellation and a broken state machine do.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Invalid cascade state: {0}")]
    InvalidState(#[from] DomainError),
}

impl GenerateError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerateError::Cancelled)
    }
}

/// Use case for generating quiz questions or a personality profile
pub struct GenerateContentUseCase<G: ProviderGateway + 'static> {
    gateway: Arc<G>,
    registry: Arc<ProviderRegistry>,
    prompts: Arc<PromptCatalog>,
    settings: CascadeSettings,
    cancellation_token: Option<CancellationToken>,
}

impl<G: ProviderGateway + 'static> Clone for GenerateContentUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            registry: self.registry.clone(),
            prompts: self.prompts.clone(),
            settings: self.settings,
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<G: ProviderGateway + 'static> GenerateContentUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: Arc<ProviderRegistry>, prompts: Arc<PromptCatalog>) -> Self {
        Self {
            gateway,
            registry,
            prompts,
            settings: CascadeSettings::default(),
            cancellation_token: None,
        }
    }

    pub fn with_settings(mut self, settings: CascadeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Generate content without status reporting
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutcome, GenerateError> {
        self.generate_with_status(request, &NoStatus).await
    }

    /// Generate content, reporting cascade progress to `status`.
    ///
    /// Once the cancellation token fires, no further events reach `status`
    /// and the call returns [`GenerateError::Cancelled`].
    pub async fn generate_with_status(
        &self,
        request: &GenerationRequest,
        status: &dyn StatusNotifier,
    ) -> Result<GenerationOutcome, GenerateError> {
        let guard;
        let status: &dyn StatusNotifier = match &self.cancellation_token {
            Some(token) => {
                guard = CancellationGuard::new(status, token.clone());
                &guard
            }
            None => status,
        };

        check_cancelled(&self.cancellation_token)?;
        info!(
            "Generating {} ({}) across {} providers",
            request.kind(),
            request.locale(),
            self.registry.len()
        );

        let outcome = match request.kind() {
            GenerationKind::Questions => self.generate_questions(request, status).await?,
            GenerationKind::Analysis => self.generate_profile(request, status).await?,
        };

        info!("Generated {} from {}", request.kind(), outcome.source_label);
        Ok(outcome)
    }

    async fn generate_questions(
        &self,
        request: &GenerationRequest,
        status: &dyn StatusNotifier,
    ) -> Result<GenerationOutcome, GenerateError> {
        let locale = request.locale();
        let purpose = PromptPurpose::from(request.kind());
        let padding = question_bank(locale);
        let prompt = self
            .prompts
            .template(locale, purpose)
            .render(request.answers());

        let run = self
            .cascade(status)
            .run(purpose, &prompt, |text| {
                questions_from_text(text, padding)
            })
            .await?;

        match run.winner {
            Some((provider, questions)) => Ok(GenerationOutcome::new(
                GeneratedContent::Questions(questions),
                SourceLabel::Provider(provider),
            )
            .with_attempts(run.attempts)),
            None => {
                self.complete_fallback(run.state)?;
                Ok(GenerationOutcome::new(
                    GeneratedContent::Questions(padding.clone()),
                    SourceLabel::Fallback,
                )
                .with_attempts(run.attempts))
            }
        }
    }

    async fn generate_profile(
        &self,
        request: &GenerationRequest,
        status: &dyn StatusNotifier,
    ) -> Result<GenerationOutcome, GenerateError> {
        let locale = request.locale();
        let purpose = PromptPurpose::from(request.kind());
        let prompt = self
            .prompts
            .template(locale, purpose)
            .render(request.answers());

        let run = self
            .cascade(status)
            .run(purpose, &prompt, profile_from_text)
            .await?;

        if let Some((provider, profile)) = run.winner {
            return Ok(GenerationOutcome::new(
                GeneratedContent::Profile(profile),
                SourceLabel::Provider(provider),
            )
            .with_attempts(run.attempts));
        }

        let mut attempts = run.attempts;
        let catalog = self.candidate_catalog(request, status).await?;
        let candidates = match catalog.winner {
            Some((_, candidates)) => candidates,
            None => {
                self.complete_fallback(catalog.state)?;
                Vec::new()
            }
        };
        attempts.extend(catalog.attempts);

        debug!("Matching answers against {} candidate profiles", candidates.len());
        let profile = select_profile(&candidates, &request.answer_text(), locale);
        self.complete_fallback(run.state)?;

        Ok(GenerationOutcome::new(GeneratedContent::Profile(profile), SourceLabel::Fallback)
            .with_attempts(attempts))
    }

    /// Run the same cascade with the catalog prompt
    async fn candidate_catalog(
        &self,
        request: &GenerationRequest,
        status: &dyn StatusNotifier,
    ) -> Result<CascadeRun<Vec<PersonalityProfile>>, GenerateError> {
        let prompt = self
            .prompts
            .template(request.locale(), PromptPurpose::Catalog)
            .render(request.answers());

        self.cascade(status)
            .run(PromptPurpose::Catalog, &prompt, catalog_from_text)
            .await
    }

    fn cascade<'a>(&'a self, status: &'a dyn StatusNotifier) -> Cascade<'a, G> {
        Cascade {
            gateway: self.gateway.as_ref(),
            registry: self.registry.as_ref(),
            settings: self.settings,
            status,
            cancellation_token: &self.cancellation_token,
        }
    }

    fn complete_fallback(&self, state: CascadeState) -> Result<(), GenerateError> {
        let done = state.advance(CascadeEvent::FallbackCompleted, self.registry.len())?;
        debug!("Cascade {:?} --FallbackCompleted--> {:?}", state, done);
        Ok(())
    }
}
