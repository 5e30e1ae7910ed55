//! Image provider error types.
//!
//! These errors stay inside the image layer: the orchestrator treats an
//! exhausted provider chain as a missing illustration, not a failure.

/// Specific error conditions for image providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// HTTP transport failure
    #[display("Image request failed: {}", _0)]
    Transport(String),
    /// Provider returned a non-success status
    #[display("Image provider returned status {}", _0)]
    Status(u16),
    /// Payload too small to be a real image
    #[display("Image payload below sanity threshold: {} bytes", _0)]
    UndersizedPayload(usize),
    /// Response body did not contain image data in the expected shape
    #[display("Image response missing payload: {}", _0)]
    MissingPayload(String),
    /// Base64 image data failed to decode
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Error type for image generation failures.
///
/// # Examples
///
/// ```
/// use inkbound_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::UndersizedPayload(12));
/// assert!(format!("{}", err).contains("12 bytes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The specific error condition
    pub kind: ImageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
