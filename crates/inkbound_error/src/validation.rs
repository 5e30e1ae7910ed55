//! Validation error types for caller-supplied input.

/// Specific precondition violations on caller input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Story seed shorter than the 10 character minimum
    #[display("Story prompt must be at least 10 characters long (got {})", length)]
    SeedTooShort {
        /// Trimmed seed length
        length: usize,
    },
    /// Choice id does not belong to the current scene
    #[display("Invalid choice id: {}", _0)]
    InvalidChoiceId(u32),
    /// Story has no current scene to advance from
    #[display("No current scene found")]
    NoCurrentScene,
    /// Scene narrative shorter than the 20 character minimum
    #[display("Scene content must be at least 20 characters long (got {})", length)]
    SceneContentTooShort {
        /// Trimmed content length
        length: usize,
    },
    /// Choice text shorter than the 10 character minimum
    #[display("Choice text must be at least 10 characters long: {:?}", _0)]
    ChoiceTextTooShort(String),
    /// A scene must carry zero or exactly two choices
    #[display("A scene must have 0 or 2 choices (got {})", _0)]
    WrongChoiceCount(usize),
    /// Generated scene text failed the pre-cleaning length floor
    #[display("Generated scene too short: {} characters", _0)]
    GeneratedSceneTooShort(usize),
    /// Generated choice text failed the 8 character floor
    #[display("Generated choices too short")]
    GeneratedChoicesTooShort,
}

/// Error type for precondition violations.
///
/// Always surfaced to the end user as an actionable message; never retried.
///
/// # Examples
///
/// ```
/// use inkbound_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoCurrentScene);
/// assert!(format!("{}", err).contains("current scene"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
