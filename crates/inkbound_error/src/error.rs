//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, ImageError, ParseError, StorageError, ValidationError,
};

/// Foundation error enum covering every Inkbound subsystem.
///
/// # Examples
///
/// ```
/// use inkbound_error::{InkboundError, ValidationError, ValidationErrorKind};
///
/// let val_err = ValidationError::new(ValidationErrorKind::NoCurrentScene);
/// let err: InkboundError = val_err.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum InkboundErrorKind {
    /// Caller input violated a precondition
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Text-generation provider failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Model output could not be structurally interpreted
    #[from(ParseError)]
    Parse(ParseError),
    /// Image provider failure
    #[from(ImageError)]
    Image(ImageError),
    /// Image storage failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration failure
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Inkbound error with kind discrimination.
///
/// # Examples
///
/// ```
/// use inkbound_error::{InkboundResult, GenerationError, GenerationErrorKind};
///
/// fn might_fail() -> InkboundResult<String> {
///     Err(GenerationError::new(GenerationErrorKind::EmptyResponse))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Inkbound Error: {}", _0)]
pub struct InkboundError(Box<InkboundErrorKind>);

impl InkboundError {
    /// Create a new error from a kind.
    pub fn new(kind: InkboundErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InkboundErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to InkboundErrorKind
impl<T> From<T> for InkboundError
where
    T: Into<InkboundErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Inkbound operations.
pub type InkboundResult<T> = std::result::Result<T, InkboundError>;
