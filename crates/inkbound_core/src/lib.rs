//! Core data types for the Inkbound story engine.
//!
//! This crate provides the append-only scene graph (`Story`, `Scene`,
//! `Choice`), the runtime configuration surface (`Settings`), and the
//! read-only comic-book projection used for export.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comic;
mod image;
mod settings;
mod story;

pub use comic::{sanitize_for_print, ComicBook, ComicPage, ComicPanel};
pub use image::ImageRef;
pub use settings::{ArtStyle, GenerationConfig, ImageMode, Settings};
pub use story::{Choice, PanelDescriptor, Scene, Story, MIN_CHOICE_LEN, MIN_SCENE_LEN, MIN_SEED_LEN};
