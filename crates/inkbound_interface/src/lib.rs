//! Provider trait definitions for the Inkbound story engine.
//!
//! The generation layer depends on these traits only; concrete providers
//! live in `inkbound_models` and fakes are trivial to hand-roll in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageProvider, TextProvider};
