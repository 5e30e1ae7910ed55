//! Inkbound - interactive AI-driven branching comic stories.
//!
//! A reader seeds a story; a text model writes prose scenes and exactly
//! two forward choices per scene; image providers illustrate each scene
//! in a chosen comic art style; the reader picks a branch until the
//! length cap forces a closing scene. A read-only comic-book projection
//! of the finished story supports export.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use inkbound::{GenerationClient, GeminiTextProvider, Settings, StoryEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env()?;
//!     let provider = GeminiTextProvider::new(settings.model_name())?;
//!     let client = GenerationClient::new(provider, settings.generation().clone());
//!     let engine = StoryEngine::new(client, None, settings);
//!
//!     let mut story = engine.start("A cartographer maps a city that keeps moving").await?;
//!     let scene = story.current_scene().expect("opening scene");
//!     println!("{}", scene.content());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The workspace is organized as focused crates, all re-exported here:
//!
//! - `inkbound_error` - error types
//! - `inkbound_core` - story data model, settings, comic projection
//! - `inkbound_interface` - provider traits
//! - `inkbound_storage` - image persistence
//! - `inkbound_models` - Gemini, Imagen, and Pollinations providers
//! - `inkbound_narrative` - prompts, parsing, generation client, engine

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use inkbound_core::{
    sanitize_for_print, ArtStyle, Choice, ComicBook, ComicPage, ComicPanel, GenerationConfig,
    ImageMode, ImageRef, PanelDescriptor, Scene, Settings, Story,
};
pub use inkbound_error::{
    ConfigError, GenerationError, ImageError, InkboundError, InkboundErrorKind, InkboundResult,
    ParseError, StorageError, ValidationError,
};
pub use inkbound_interface::{ImageProvider, TextProvider};
pub use inkbound_models::{
    GeminiTextProvider, ImagenProvider, PollinationsEndpoint, PollinationsProvider,
};
pub use inkbound_narrative::{
    art, parse, prompts, GenerationClient, ImageClient, RetryPolicy, StoryEngine, FALLBACK_TITLE,
};
pub use inkbound_storage::{FileImageStore, ImageStore};
