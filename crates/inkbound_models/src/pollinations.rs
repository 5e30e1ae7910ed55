//! Pollinations image providers (free fallbacks).

use crate::MIN_IMAGE_BYTES;
use async_trait::async_trait;
use inkbound_error::{ImageError, ImageErrorKind, InkboundResult};
use inkbound_interface::ImageProvider;
use reqwest::Url;
use std::time::Duration;
use tracing::instrument;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// The two public Pollinations endpoints, used as an ordered fallback
/// pair after Imagen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollinationsEndpoint {
    /// `pollinations.ai/p/{prompt}` with flux model parameters
    Primary,
    /// `image.pollinations.ai/prompt/{prompt}`, no parameters
    Alternate,
}

impl PollinationsEndpoint {
    /// URL length limits differ per endpoint, so the prompt is truncated
    /// before encoding.
    fn prompt_limit(self) -> usize {
        match self {
            Self::Primary => 500,
            Self::Alternate => 300,
        }
    }

    fn build_url(self, prompt: &str) -> InkboundResult<Url> {
        let limit = self.prompt_limit();
        let short: String = prompt.chars().take(limit).collect();

        let base = match self {
            Self::Primary => "https://pollinations.ai/p/",
            Self::Alternate => "https://image.pollinations.ai/prompt/",
        };

        let mut url = Url::parse(base)
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;
        url.path_segments_mut()
            .map_err(|_| {
                ImageError::new(ImageErrorKind::Transport("cannot-be-a-base URL".to_string()))
            })?
            .pop_if_empty()
            .push(&short);

        if self == Self::Primary {
            url.query_pairs_mut()
                .append_pair("width", "1024")
                .append_pair("height", "576")
                .append_pair("nologo", "true")
                .append_pair("model", "flux");
        }

        Ok(url)
    }
}

/// Image provider backed by one of the Pollinations endpoints.
///
/// Register one provider per endpoint to get the two-stage fallback.
#[derive(Debug)]
pub struct PollinationsProvider {
    client: reqwest::Client,
    endpoint: PollinationsEndpoint,
}

impl PollinationsProvider {
    /// Create a provider for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: PollinationsEndpoint) -> InkboundResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ImageProvider for PollinationsProvider {
    #[instrument(skip(self, prompt), fields(endpoint = ?self.endpoint, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> InkboundResult<Vec<u8>> {
        let url = self.endpoint.build_url(prompt)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::new(ImageErrorKind::Status(status.as_u16())).into());
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?
            .to_vec();

        if data.len() <= MIN_IMAGE_BYTES {
            return Err(ImageError::new(ImageErrorKind::UndersizedPayload(data.len())).into());
        }

        tracing::info!(size = data.len(), "Generated image with Pollinations");
        Ok(data)
    }

    fn provider_name(&self) -> &'static str {
        match self.endpoint {
            PollinationsEndpoint::Primary => "pollinations",
            PollinationsEndpoint::Alternate => "pollinations-alt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_url_carries_flux_parameters() {
        let url = PollinationsEndpoint::Primary
            .build_url("a lighthouse in a storm")
            .unwrap();
        let rendered = url.to_string();
        assert!(rendered.starts_with("https://pollinations.ai/p/a%20lighthouse"));
        assert!(rendered.contains("model=flux"));
        assert!(rendered.contains("width=1024"));
    }

    #[test]
    fn alternate_url_has_no_query() {
        let url = PollinationsEndpoint::Alternate
            .build_url("a lighthouse in a storm")
            .unwrap();
        assert!(url.to_string().starts_with("https://image.pollinations.ai/prompt/"));
        assert!(url.query().is_none());
    }

    #[test]
    fn prompts_are_truncated_per_endpoint() {
        let long = "x".repeat(2000);
        let url = PollinationsEndpoint::Alternate.build_url(&long).unwrap();
        let segment = url.path_segments().unwrap().last().unwrap().to_string();
        assert_eq!(segment.len(), 300);
    }
}
