//! Provider implementations for the Inkbound story engine.
//!
//! Text generation goes through the Gemini API via the `gemini-rust` SDK.
//! Illustrations come from Imagen as the primary provider with the two
//! public Pollinations endpoints as free fallbacks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod imagen;
mod pollinations;

pub use gemini::GeminiTextProvider;
pub use imagen::ImagenProvider;
pub use pollinations::{PollinationsEndpoint, PollinationsProvider};

/// Payloads at or below this many bytes are error pages or placeholders,
/// not real images.
pub const MIN_IMAGE_BYTES: usize = 1000;
