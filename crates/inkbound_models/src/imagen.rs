//! Imagen image provider (primary).

use crate::MIN_IMAGE_BYTES;
use async_trait::async_trait;
use base64::Engine;
use inkbound_error::{ImageError, ImageErrorKind, InkboundResult};
use inkbound_interface::ImageProvider;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::instrument;

const PREDICT_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/imagen-4.0-ultra-generate-001:predict";

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

/// Image provider backed by the Imagen predict endpoint.
///
/// Sends a single-image 16:9 request and decodes the base64 payload from
/// the first prediction.
pub struct ImagenProvider {
    client: reqwest::Client,
    api_key: String,
}

impl std::fmt::Debug for ImagenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagenProvider").finish_non_exhaustive()
    }
}

impl ImagenProvider {
    /// Create a provider, reading `GEMINI_API_KEY` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unset or the HTTP client cannot be
    /// built.
    pub fn new() -> InkboundResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ImageError::new(ImageErrorKind::MissingApiKey))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;

        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl ImageProvider for ImagenProvider {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> InkboundResult<Vec<u8>> {
        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "16:9",
            },
        });

        let response = self
            .client
            .post(PREDICT_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::new(ImageErrorKind::Status(status.as_u16())).into());
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;

        let encoded = parsed
            .predictions
            .into_iter()
            .find_map(|p| p.bytes_base64_encoded)
            .ok_or_else(|| {
                ImageError::new(ImageErrorKind::MissingPayload(
                    "no predictions with image data".to_string(),
                ))
            })?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| ImageError::new(ImageErrorKind::Base64Decode(e.to_string())))?;

        if data.len() <= MIN_IMAGE_BYTES {
            return Err(ImageError::new(ImageErrorKind::UndersizedPayload(data.len())).into());
        }

        tracing::info!(size = data.len(), "Generated image with Imagen");
        Ok(data)
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }
}
