//! Error types for the Inkbound story engine.
//!
//! This crate provides the foundation error types used throughout the
//! Inkbound workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use inkbound_error::{InkboundResult, ValidationError, ValidationErrorKind};
//!
//! fn check_seed(seed: &str) -> InkboundResult<()> {
//!     if seed.trim().len() < 10 {
//!         Err(ValidationError::new(ValidationErrorKind::SeedTooShort {
//!             length: seed.trim().len(),
//!         }))?;
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_seed("too short").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod image;
mod parse;
mod storage;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{InkboundError, InkboundErrorKind, InkboundResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use image::{ImageError, ImageErrorKind};
pub use parse::{ParseError, ParseErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
