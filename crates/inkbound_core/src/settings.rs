//! Runtime configuration: environment-loaded settings, generation
//! parameters, and the art-style and image-mode enums.

use inkbound_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling parameters passed through to the text provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling threshold
    top_p: f32,
    /// Top-k sampling cutoff
    top_k: u32,
    /// Output token ceiling per request
    max_output_tokens: u32,
}

impl GenerationConfig {
    /// Assemble a generation config.
    pub fn new(temperature: f32, top_p: f32, top_k: u32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_p,
            top_k,
            max_output_tokens,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.85,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 800,
        }
    }
}

/// Visual style applied to every image prompt in a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ArtStyle {
    /// Bold-outline American comic book style
    #[display("western_comic")]
    WesternComic,
    /// Japanese manga style with screentones
    #[display("manga")]
    Manga,
    /// Bright animated cartoon style
    #[display("cartoon")]
    Cartoon,
    /// Moody, realistic graphic novel style
    #[display("graphic_novel")]
    GraphicNovel,
    /// Vintage 1960s halftone comic style
    #[display("retro_comic")]
    RetroComic,
}

impl ArtStyle {
    /// The detailed style description injected into image prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Self::WesternComic => {
                "American comic book style with bold black outlines, dynamic poses, \
                 cel-shading, vibrant colors, dramatic shadows, and action-oriented composition. \
                 Similar to Marvel/DC comics with strong contrast and heroic proportions."
            }
            Self::Manga => {
                "Japanese manga style with expressive eyes, speed lines for motion, \
                 screentones for shading, dramatic expressions, and dynamic panel layouts. \
                 Black and white with gray tones, emotional depth, and cinematic framing."
            }
            Self::Cartoon => {
                "Animated cartoon style with bright cheerful colors, rounded shapes, \
                 exaggerated expressions, clean bold lines, and playful compositions. \
                 Fun and energetic like modern animated series."
            }
            Self::GraphicNovel => {
                "Graphic novel style with realistic proportions, moody atmospheric lighting, \
                 muted color palette, detailed backgrounds, and cinematic composition. \
                 Sophisticated and mature visual storytelling."
            }
            Self::RetroComic => {
                "Vintage 1960s comic book style with halftone dots, primary colors, \
                 classic speech bubbles, nostalgic aesthetics, and bold simple shapes. \
                 Retro pop art feel with limited color palette."
            }
        }
    }

    /// All style variants, in presentation order.
    pub fn all() -> [Self; 5] {
        [
            Self::WesternComic,
            Self::Manga,
            Self::Cartoon,
            Self::GraphicNovel,
            Self::RetroComic,
        ]
    }
}

impl Default for ArtStyle {
    fn default() -> Self {
        Self::WesternComic
    }
}

impl FromStr for ArtStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "western_comic" | "western" => Ok(Self::WesternComic),
            "manga" => Ok(Self::Manga),
            "cartoon" => Ok(Self::Cartoon),
            "graphic_novel" | "graphic" => Ok(Self::GraphicNovel),
            "retro_comic" | "retro" => Ok(Self::RetroComic),
            other => Err(ConfigError::new(ConfigErrorKind::UnknownArtStyle(
                other.to_string(),
            ))),
        }
    }
}

/// How each scene is illustrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
    /// One single-panel illustration per scene
    #[display("panel")]
    Panel,
    /// A multi-panel comic page with title and panel breakdown per scene
    #[display("page")]
    Page,
}

impl Default for ImageMode {
    fn default() -> Self {
        Self::Panel
    }
}

impl FromStr for ImageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panel" => Ok(Self::Panel),
            "page" => Ok(Self::Page),
            other => Err(ConfigError::new(ConfigErrorKind::UnknownImageMode(
                other.to_string(),
            ))),
        }
    }
}

/// Application settings, loaded from the environment with defaults.
///
/// The Gemini API key is deliberately absent; providers read it from the
/// environment themselves so settings values stay safe to log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Settings {
    /// Text model identifier
    model_name: String,
    /// Sampling parameters for text generation
    generation: GenerationConfig,
    /// Scene count at which the story must end
    max_story_length: usize,
    /// How many recent scenes feed the prompt context window
    context_scenes: usize,
    /// Number of forward choices per scene, fixed at two
    num_choices: usize,
    /// Visual style for image prompts
    art_style: ArtStyle,
    /// Per-scene illustration mode
    image_mode: ImageMode,
}

impl Settings {
    /// Load settings from environment variables, applying defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            model_name: env_or("MODEL_NAME", "gemini-2.0-flash-exp"),
            generation: GenerationConfig::new(
                parse_env("TEMPERATURE", 0.85)?,
                parse_env("TOP_P", 0.95)?,
                parse_env("TOP_K", 40)?,
                parse_env("MAX_TOKENS", 800)?,
            ),
            max_story_length: parse_env("MAX_STORY_LENGTH", 20)?,
            context_scenes: parse_env("CONTEXT_SCENES", 3)?,
            num_choices: 2,
            art_style: ArtStyle::default(),
            image_mode: ImageMode::default(),
        })
    }

    /// Override the art style.
    #[must_use]
    pub fn with_art_style(mut self, style: ArtStyle) -> Self {
        self.art_style = style;
        self
    }

    /// Override the illustration mode.
    #[must_use]
    pub fn with_image_mode(mut self, mode: ImageMode) -> Self {
        self.image_mode = mode;
        self
    }

    /// Override the story length cap.
    #[must_use]
    pub fn with_max_story_length(mut self, len: usize) -> Self {
        self.max_story_length = len;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_name: "gemini-2.0-flash-exp".to_string(),
            generation: GenerationConfig::default(),
            max_story_length: 20,
            context_scenes: 3,
            num_choices: 2,
            art_style: ArtStyle::default(),
            image_mode: ImageMode::default(),
        }
    }
}

fn env_or(var: &'static str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::new(ConfigErrorKind::InvalidValue { var, value })),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.model_name(), "gemini-2.0-flash-exp");
        assert_eq!(*settings.max_story_length(), 20);
        assert_eq!(*settings.context_scenes(), 3);
        assert_eq!(*settings.num_choices(), 2);
        let config = settings.generation();
        assert!((config.temperature() - 0.85).abs() < f32::EPSILON);
        assert!((config.top_p() - 0.95).abs() < f32::EPSILON);
        assert_eq!(*config.top_k(), 40);
        assert_eq!(*config.max_output_tokens(), 800);
    }

    #[test]
    fn art_style_parses_canonical_and_short_names() {
        assert_eq!("western_comic".parse::<ArtStyle>().unwrap(), ArtStyle::WesternComic);
        assert_eq!("MANGA".parse::<ArtStyle>().unwrap(), ArtStyle::Manga);
        assert_eq!("retro".parse::<ArtStyle>().unwrap(), ArtStyle::RetroComic);
        assert!("oil_painting".parse::<ArtStyle>().is_err());
    }

    #[test]
    fn image_mode_parsing() {
        assert_eq!("panel".parse::<ImageMode>().unwrap(), ImageMode::Panel);
        assert_eq!(" Page ".parse::<ImageMode>().unwrap(), ImageMode::Page);
        assert!("comic".parse::<ImageMode>().is_err());
    }

    #[test]
    fn every_style_carries_a_description() {
        for style in ArtStyle::all() {
            assert!(!style.description().is_empty());
        }
    }
}
