//! Text generation error types.

/// Specific error conditions for the text-generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the provider client
    #[display("Failed to create provider client: {}", _0)]
    ClientCreation(String),
    /// Provider request failed
    #[display("Text generation request failed: {}", _0)]
    ApiRequest(String),
    /// Provider returned an empty response
    #[display("Empty response from provider")]
    EmptyResponse,
    /// All retry attempts were consumed
    #[display("Failed to generate text after {} attempts: {}", attempts, last_error)]
    RetriesExhausted {
        /// Number of attempts made
        attempts: usize,
        /// Message from the final underlying failure
        last_error: String,
    },
}

/// Error type for text-generation failures.
///
/// Surfaced to the user as a generic "generation failed" message; the whole
/// round is abandoned and no partial state persists.
///
/// # Examples
///
/// ```
/// use inkbound_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("Empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
