//! Trait definitions for text and image generation backends.

use async_trait::async_trait;
use inkbound_core::GenerationConfig;
use inkbound_error::InkboundResult;

/// A text-generation backend.
///
/// Implementations map transport failures, quota failures, and empty
/// model output to `GenerationError`; retry policy is the caller's
/// concern, never the provider's.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for a prompt under the given sampling parameters.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> InkboundResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-exp").
    fn model_name(&self) -> &str;
}

/// An image-generation backend.
///
/// Implementations fail on transport errors and on payloads too small to
/// be a real image; they never write to disk, that is the store's job.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate raw image bytes for a prompt.
    async fn generate(&self, prompt: &str) -> InkboundResult<Vec<u8>>;

    /// Provider name (e.g., "imagen", "pollinations").
    fn provider_name(&self) -> &'static str;
}
