//! Generation clients: retrying text generation and the image provider
//! fallback chain.

use crate::{parse, prompts};
use inkbound_core::{GenerationConfig, ImageRef, PanelDescriptor};
use inkbound_error::{
    GenerationError, GenerationErrorKind, InkboundResult, ValidationError, ValidationErrorKind,
};
use inkbound_interface::{ImageProvider, TextProvider};
use inkbound_storage::ImageStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Title used when title generation fails; titles are decoration, never
/// worth aborting a round over.
pub const FALLBACK_TITLE: &str = "The Story Continues";

/// Raw scene text below this length is a degenerate response.
const MIN_RAW_SCENE_LEN: usize = 50;
/// Generated choice text below this length is a degenerate response.
const MIN_RAW_CHOICE_LEN: usize = 8;

/// Sequential retry schedule for text generation.
///
/// Attempts never overlap; the delay grows by `multiplier` after each
/// failed attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: usize,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
    /// Growth factor applied after each failed attempt
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(2),
            multiplier: 1.5,
        }
    }
}

impl RetryPolicy {
    /// A policy with a different attempt budget and the default backoff.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Text-generation client wrapping a provider with retry, validation,
/// and parsing.
pub struct GenerationClient<T> {
    provider: T,
    config: GenerationConfig,
    retry: RetryPolicy,
}

impl<T: TextProvider> GenerationClient<T> {
    /// Create a client with the default retry policy.
    pub fn new(provider: T, config: GenerationConfig) -> Self {
        Self {
            provider,
            config,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &T {
        &self.provider
    }

    /// Generate text with sequential retries.
    ///
    /// Empty output counts as a failed attempt. Exhaustion yields an
    /// error carrying the last underlying failure message.
    #[instrument(skip(self, prompt), fields(provider = self.provider.provider_name(), prompt_len = prompt.len()))]
    pub async fn generate_text(&self, prompt: &str) -> InkboundResult<String> {
        self.generate_with_policy(prompt, &self.retry).await
    }

    async fn generate_with_policy(
        &self,
        prompt: &str,
        policy: &RetryPolicy,
    ) -> InkboundResult<String> {
        let mut delay = policy.initial_backoff;
        let mut last_error = String::new();

        for attempt in 1..=policy.max_attempts {
            match self.provider.generate(prompt, &self.config).await {
                Ok(text) if !text.trim().is_empty() => {
                    return Ok(text.trim().to_string());
                }
                Ok(_) => {
                    last_error = "Empty response from provider".to_string();
                }
                Err(e) => {
                    last_error = e.to_string();
                }
            }

            tracing::warn!(
                attempt,
                max_attempts = policy.max_attempts,
                error = %last_error,
                "Text generation attempt failed"
            );

            if attempt < policy.max_attempts {
                tokio::time::sleep(delay).await;
                delay = delay.mul_f64(policy.multiplier);
            }
        }

        Err(GenerationError::new(GenerationErrorKind::RetriesExhausted {
            attempts: policy.max_attempts,
            last_error,
        })
        .into())
    }

    /// Generate scene narrative text, enforcing the raw length floor
    /// before any cleaning happens.
    pub async fn generate_scene_text(&self, prompt: &str) -> InkboundResult<String> {
        let text = self.generate_text(prompt).await?;
        if text.chars().count() < MIN_RAW_SCENE_LEN {
            return Err(ValidationError::new(ValidationErrorKind::GeneratedSceneTooShort(
                text.chars().count(),
            ))
            .into());
        }
        Ok(text)
    }

    /// Generate and parse exactly two choices.
    pub async fn generate_choices(&self, prompt: &str) -> InkboundResult<(String, String)> {
        let raw = self.generate_text(prompt).await?;
        let (choice_1, choice_2) = parse::parse_choices(&raw)?;

        if choice_1.chars().count() < MIN_RAW_CHOICE_LEN
            || choice_2.chars().count() < MIN_RAW_CHOICE_LEN
        {
            return Err(
                ValidationError::new(ValidationErrorKind::GeneratedChoicesTooShort).into(),
            );
        }

        Ok((choice_1, choice_2))
    }

    /// Generate and parse a panel breakdown for page-mode illustration.
    pub async fn generate_panel_breakdown(
        &self,
        scene_text: &str,
        panel_count: usize,
    ) -> InkboundResult<Vec<PanelDescriptor>> {
        let raw = self
            .generate_text(&prompts::panel_breakdown(scene_text, panel_count))
            .await?;
        let panels = parse::parse_panel_breakdown(&raw)?;
        Ok(panels)
    }

    /// Generate a short page title, with a fixed fallback on any failure.
    ///
    /// Runs under a reduced two-attempt policy; a title is never worth a
    /// full retry budget.
    pub async fn generate_scene_title(&self, scene_text: &str) -> String {
        let policy = RetryPolicy::default().with_max_attempts(2);
        match self
            .generate_with_policy(&prompts::title(scene_text), &policy)
            .await
        {
            Ok(raw) => {
                let title = parse::parse_title(&raw);
                if title.is_empty() {
                    FALLBACK_TITLE.to_string()
                } else {
                    title
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not generate scene title");
                FALLBACK_TITLE.to_string()
            }
        }
    }
}

/// Ordered image provider chain plus the store that persists results.
///
/// Image acquisition is an optional enhancement: the chain reports how
/// far it got through tracing, but callers only ever see `Option`.
pub struct ImageClient {
    providers: Vec<Arc<dyn ImageProvider>>,
    store: Arc<dyn ImageStore>,
}

impl ImageClient {
    /// Create a client from an ordered provider chain and a store.
    pub fn new(providers: Vec<Arc<dyn ImageProvider>>, store: Arc<dyn ImageStore>) -> Self {
        Self { providers, store }
    }

    /// Try each provider in order; the first payload that both generates
    /// and stores successfully wins. Returns `None` when everything fails.
    #[instrument(skip(self, prompt), fields(scene_id, providers = self.providers.len(), prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str, scene_id: u32) -> Option<ImageRef> {
        for provider in &self.providers {
            let name = provider.provider_name();
            match provider.generate(prompt).await {
                Ok(data) => match self.store.store(scene_id, &data).await {
                    Ok(reference) => {
                        tracing::info!(provider = name, scene_id, "Scene illustrated");
                        return Some(reference);
                    }
                    Err(e) => {
                        tracing::warn!(provider = name, error = %e, "Failed to store image");
                    }
                },
                Err(e) => {
                    tracing::warn!(provider = name, error = %e, "Image provider failed");
                }
            }
        }

        tracing::warn!(scene_id, "All image providers failed; scene will have no illustration");
        None
    }
}
