//! Parse error types for structured model output.

/// Specific error conditions when interpreting model output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// One or both choice tags were absent from the response
    #[display("Could not extract both choices from response")]
    MissingChoiceTag,
    /// A choice tag was present but its text was empty
    #[display("Choice {} is empty", _0)]
    EmptyChoice(u32),
    /// The two extracted choices are identical ignoring case
    #[display("Generated choices are identical")]
    IdenticalChoices,
    /// No panel blocks were recovered from a breakdown response
    #[display("No panels recovered from breakdown response")]
    NoPanels,
}

/// Error type for structurally uninterpretable model output.
///
/// Generation succeeded but the text did not match the expected tag format.
/// Treated identically to a generation failure for user visibility; the
/// distinction exists for diagnostics.
///
/// # Examples
///
/// ```
/// use inkbound_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::IdenticalChoices);
/// assert!(format!("{}", err).contains("identical"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The specific error condition
    pub kind: ParseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
