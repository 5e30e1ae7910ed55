//! Story generation for Inkbound: prompt composition, response parsing,
//! the retrying generation client, and the orchestrating story engine.
//!
//! The engine is the sole mutator of a [`Story`](inkbound_core::Story).
//! Text failures abort a round with the story unchanged; image failures
//! degrade to a scene without an illustration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod art;
mod client;
mod engine;
pub mod parse;
pub mod prompts;

pub use client::{GenerationClient, ImageClient, RetryPolicy, FALLBACK_TITLE};
pub use engine::StoryEngine;
