//! The story orchestrator.
//!
//! `StoryEngine` drives one playthrough: it owns the generation clients
//! and settings, and is the sole mutator of a `Story`. A round either
//! appends a complete scene or leaves the story's scene list untouched;
//! scenes are appended only after every fallible step has finished.

use crate::client::{GenerationClient, ImageClient};
use crate::{art, prompts};
use inkbound_core::{
    Choice, ImageMode, ImageRef, PanelDescriptor, Scene, Settings, Story,
};
use inkbound_error::{InkboundResult, ValidationError, ValidationErrorKind};
use inkbound_interface::TextProvider;
use tracing::instrument;

/// Panels per page in page mode.
const PAGE_PANEL_COUNT: usize = 4;

/// Everything the illustration step produced for one scene.
struct Illustration {
    image: Option<ImageRef>,
    image_prompt: Option<String>,
    page: Option<(String, Vec<PanelDescriptor>)>,
}

impl Illustration {
    fn none() -> Self {
        Self {
            image: None,
            image_prompt: None,
            page: None,
        }
    }
}

/// Orchestrates story progression: opening scenes, advancement by
/// choice, and the ending once the length cap is reached.
pub struct StoryEngine<T> {
    client: GenerationClient<T>,
    images: Option<ImageClient>,
    settings: Settings,
}

impl<T: TextProvider> StoryEngine<T> {
    /// Create an engine. Passing `None` for `images` disables
    /// illustration entirely.
    pub fn new(client: GenerationClient<T>, images: Option<ImageClient>, settings: Settings) -> Self {
        Self {
            client,
            images,
            settings,
        }
    }

    /// The engine's settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Start a new story from a seed: opening scene, two choices, and an
    /// illustration attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is too short or any text-generation
    /// step fails after retries.
    #[instrument(skip(self, seed), fields(seed_len = seed.len()))]
    pub async fn start(&self, seed: &str) -> InkboundResult<Story> {
        let mut story = Story::new(seed)?;

        let raw = self
            .client
            .generate_scene_text(&prompts::opening(story.initial_prompt()))
            .await?;
        let content = crate::parse::clean_scene_text(&raw);

        let context = story.context_window(*self.settings.context_scenes());
        let (text_1, text_2) = self
            .client
            .generate_choices(&prompts::choices(&content, &context))
            .await?;
        let choices = vec![Choice::new(1, text_1)?, Choice::new(2, text_2)?];

        let illustration = self.illustrate(1, &content).await;

        let mut scene = Scene::new(1, content, choices)?
            .with_image(illustration.image, illustration.image_prompt);
        if let Some((title, panels)) = illustration.page {
            scene = scene.with_page(title, panels);
        }

        story.add_scene(scene);
        tracing::info!("Story started");
        Ok(story)
    }

    /// Advance the story by one round: record the choice, generate the
    /// next scene (or the ending, at the length cap), and append it.
    ///
    /// The new scene is appended only after all fallible work succeeds,
    /// so a failed round never leaves a partial scene behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the story has no current scene, the choice id
    /// is not one of the current scene's, or text generation fails.
    #[instrument(skip(self, story), fields(choice_id, scene_count = story.scene_count()))]
    pub async fn advance<'a>(
        &self,
        story: &'a mut Story,
        choice_id: u32,
    ) -> InkboundResult<&'a Scene> {
        {
            let current = story
                .current_scene_mut()
                .ok_or_else(|| ValidationError::new(ValidationErrorKind::NoCurrentScene))?;
            if !current.select_choice(choice_id) {
                return Err(
                    ValidationError::new(ValidationErrorKind::InvalidChoiceId(choice_id)).into(),
                );
            }
        }

        let chosen = story
            .current_scene()
            .and_then(Scene::selected_choice)
            .map(|c| c.text().clone())
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::NoCurrentScene))?;

        let context = story.context_window(*self.settings.context_scenes());
        let scene_id = (story.scene_count() + 1) as u32;
        let is_ending = story.scene_count() + 1 >= *self.settings.max_story_length();

        let (content, choices) = if is_ending {
            let raw = self
                .client
                .generate_scene_text(&prompts::ending(&context, &chosen))
                .await?;
            (crate::parse::clean_scene_text(&raw), Vec::new())
        } else {
            let raw = self
                .client
                .generate_scene_text(&prompts::continuation(&context, &chosen))
                .await?;
            let content = crate::parse::clean_scene_text(&raw);
            let (text_1, text_2) = self
                .client
                .generate_choices(&prompts::choices(&content, &context))
                .await?;
            let choices = vec![Choice::new(1, text_1)?, Choice::new(2, text_2)?];
            (content, choices)
        };

        let illustration = self.illustrate(scene_id, &content).await;

        let mut scene = Scene::new(scene_id, content, choices)?
            .with_image(illustration.image, illustration.image_prompt);
        if let Some((title, panels)) = illustration.page {
            scene = scene.with_page(title, panels);
        }

        story.add_scene(scene);
        tracing::info!(scene_id, is_ending, "Story advanced");

        story
            .current_scene()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::NoCurrentScene).into())
    }

    /// Illustration step shared by `start` and `advance`.
    ///
    /// Panel mode sends one single-panel prompt. Page mode first asks
    /// for a title (non-fatal) and a structured panel breakdown; if the
    /// breakdown fails, it falls back to the single-prompt page
    /// generator. The prompt is recorded on the scene even when every
    /// provider fails, and no failure here ever aborts the round.
    async fn illustrate(&self, scene_id: u32, content: &str) -> Illustration {
        let Some(images) = &self.images else {
            return Illustration::none();
        };

        let style = *self.settings.art_style();
        let (prompt, page) = match self.settings.image_mode() {
            ImageMode::Panel => (art::panel_prompt(content, style), None),
            ImageMode::Page => {
                let title = self.client.generate_scene_title(content).await;
                match self
                    .client
                    .generate_panel_breakdown(content, PAGE_PANEL_COUNT)
                    .await
                {
                    Ok(panels) => (
                        art::page_prompt(&title, content, &panels, style),
                        Some((title, panels)),
                    ),
                    Err(e) => {
                        tracing::warn!(
                            scene_id,
                            error = %e,
                            "Panel breakdown failed, using simple page prompt"
                        );
                        (art::simple_page_prompt(content, style, PAGE_PANEL_COUNT), None)
                    }
                }
            }
        };

        let image = images.generate(&prompt, scene_id).await;
        Illustration {
            image,
            image_prompt: Some(prompt),
            page,
        }
    }
}
