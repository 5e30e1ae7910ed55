//! Google Gemini text provider.

use async_trait::async_trait;
use gemini_rust::{client::Model, Gemini};
use inkbound_core::GenerationConfig;
use inkbound_error::{GenerationError, GenerationErrorKind, InkboundResult};
use inkbound_interface::TextProvider;
use std::env;
use tracing::instrument;

/// Text provider backed by the Gemini API.
///
/// The API key is read from `GEMINI_API_KEY` at construction time and a
/// client is created once per provider; retry policy lives upstream in
/// the generation client, never here.
pub struct GeminiTextProvider {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiTextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextProvider")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiTextProvider {
    /// Create a provider for the given model.
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is unset or the SDK client
    /// cannot be created.
    pub fn new(model_name: impl Into<String>) -> InkboundResult<Self> {
        let model_name = model_name.into();
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let client = Gemini::with_model(&api_key, Self::model_name_to_enum(&model_name))
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self { client, model_name })
    }

    /// Map a model name string to the SDK's Model enum, falling back to
    /// `Model::Custom` with the "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    #[instrument(skip(self, prompt, config), fields(model = %self.model_name, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> InkboundResult<String> {
        let response = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .with_temperature(*config.temperature())
            .with_max_output_tokens(*config.max_output_tokens() as i32)
            .execute()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string()))
            })?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        tracing::debug!(response_len = text.len(), "Generated text");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
