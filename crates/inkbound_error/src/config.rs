//! Configuration error types.

/// Specific error conditions for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// An environment variable held an unparseable value
    #[display("Invalid value for {}: {:?}", var, value)]
    InvalidValue {
        /// Environment variable name
        var: &'static str,
        /// The offending value
        value: String,
    },
    /// Unknown art style name
    #[display("Unknown art style: {:?}", _0)]
    UnknownArtStyle(String),
    /// Unknown image mode name
    #[display("Unknown image mode: {:?} (expected \"panel\" or \"page\")", _0)]
    UnknownImageMode(String),
}

/// Error type for configuration loading.
///
/// # Examples
///
/// ```
/// use inkbound_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::UnknownArtStyle("oil".into()));
/// assert!(format!("{}", err).contains("oil"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
