//! The append-only scene graph: `Choice`, `Scene`, `Story`.
//!
//! A story is a linear record of the branch the reader actually took:
//! scenes are appended in order, never edited or removed, and each
//! non-terminal scene offers exactly two forward choices. Completion is
//! structural: a scene with an empty choice list is the ending.

use crate::ImageRef;
use chrono::{DateTime, Utc};
use inkbound_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Minimum length of a story seed, trimmed.
pub const MIN_SEED_LEN: usize = 10;
/// Minimum length of scene narrative text, trimmed.
pub const MIN_SCENE_LEN: usize = 20;
/// Minimum length of a choice text.
pub const MIN_CHOICE_LEN: usize = 10;

/// One of exactly two forward-narrative branches offered at a scene.
///
/// Immutable once created; owned exclusively by the scene that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Choice {
    /// Identifier unique within the owning scene
    id: u32,
    /// The choice text shown to the reader
    text: String,
}

impl Choice {
    /// Create a choice, validating the text length floor.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed text is shorter than
    /// [`MIN_CHOICE_LEN`] characters.
    pub fn new(id: u32, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into().trim().to_string();
        if text.chars().count() < MIN_CHOICE_LEN {
            return Err(ValidationError::new(
                ValidationErrorKind::ChoiceTextTooShort(text),
            ));
        }
        Ok(Self { id, text })
    }
}

/// One panel of a multi-panel comic page breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PanelDescriptor {
    /// What the panel shows
    visual: String,
    /// What the characters are doing
    action: String,
    /// Camera angle or framing
    camera: String,
    /// Emotional tone of the panel
    emotion: String,
    /// Speech-bubble text, if any
    dialogue: Option<String>,
}

impl PanelDescriptor {
    /// Assemble a panel descriptor.
    pub fn new(
        visual: impl Into<String>,
        action: impl Into<String>,
        camera: impl Into<String>,
        emotion: impl Into<String>,
        dialogue: Option<String>,
    ) -> Self {
        Self {
            visual: visual.into(),
            action: action.into(),
            camera: camera.into(),
            emotion: emotion.into(),
            dialogue,
        }
    }
}

/// One unit of generated narrative plus its illustration and outgoing
/// choices (or none, if terminal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Scene {
    /// Identifier unique within the story; equals its 1-based position
    id: u32,
    /// The scene narrative text
    content: String,
    /// Zero (ending) or exactly two forward choices
    choices: Vec<Choice>,
    /// Id of the choice the reader took, once selected
    selected_choice_id: Option<u32>,
    /// When the scene was created
    created_at: DateTime<Utc>,
    /// Handle to the generated illustration, if any
    image: Option<ImageRef>,
    /// The prompt used for illustration, recorded even when rendering failed
    image_prompt: Option<String>,
    /// Panel-by-panel breakdown when the scene was rendered as a comic page
    panel_breakdown: Option<Vec<PanelDescriptor>>,
    /// Short page title when the scene was rendered as a comic page
    title: Option<String>,
}

impl Scene {
    /// Create a scene, validating content length and choice count.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed content is shorter than
    /// [`MIN_SCENE_LEN`] characters, or if the choice count is neither
    /// zero nor two.
    pub fn new(id: u32, content: impl Into<String>, choices: Vec<Choice>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().chars().count() < MIN_SCENE_LEN {
            return Err(ValidationError::new(
                ValidationErrorKind::SceneContentTooShort {
                    length: content.trim().chars().count(),
                },
            ));
        }
        if !choices.is_empty() && choices.len() != 2 {
            return Err(ValidationError::new(ValidationErrorKind::WrongChoiceCount(
                choices.len(),
            )));
        }
        Ok(Self {
            id,
            content,
            choices,
            selected_choice_id: None,
            created_at: Utc::now(),
            image: None,
            image_prompt: None,
            panel_breakdown: None,
            title: None,
        })
    }

    /// Attach illustration data to a freshly generated scene.
    #[must_use]
    pub fn with_image(mut self, image: Option<ImageRef>, image_prompt: Option<String>) -> Self {
        self.image = image;
        self.image_prompt = image_prompt;
        self
    }

    /// Attach page-mode data (title and panel breakdown) to a scene.
    #[must_use]
    pub fn with_page(mut self, title: String, panels: Vec<PanelDescriptor>) -> Self {
        self.title = Some(title);
        self.panel_breakdown = Some(panels);
        self
    }

    /// Mark a choice as selected.
    ///
    /// Returns false without mutation if `choice_id` does not belong to
    /// this scene. Selection is a one-way transition; this is the only
    /// mutator of an existing scene.
    pub fn select_choice(&mut self, choice_id: u32) -> bool {
        if self.choices.iter().any(|c| *c.id() == choice_id) {
            self.selected_choice_id = Some(choice_id);
            true
        } else {
            false
        }
    }

    /// The selected choice, if a selection has been made.
    pub fn selected_choice(&self) -> Option<&Choice> {
        let id = self.selected_choice_id?;
        self.choices.iter().find(|c| *c.id() == id)
    }

    /// A scene with no outgoing choices is the ending of its story.
    pub fn is_ending(&self) -> bool {
        self.choices.is_empty()
    }
}

/// The complete record of one playthrough.
///
/// The orchestrator is the sole writer; presentation and export layers
/// observe read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Story {
    /// The reader's original story seed
    initial_prompt: String,
    /// All scenes in creation order, append-only
    scenes: Vec<Scene>,
    /// Index of the most recently appended scene
    current_scene_index: usize,
    /// When the playthrough began
    created_at: DateTime<Utc>,
}

impl Story {
    /// Begin a story from a seed prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed seed is shorter than
    /// [`MIN_SEED_LEN`] characters.
    pub fn new(initial_prompt: impl Into<String>) -> Result<Self, ValidationError> {
        let initial_prompt = initial_prompt.into().trim().to_string();
        if initial_prompt.chars().count() < MIN_SEED_LEN {
            return Err(ValidationError::new(ValidationErrorKind::SeedTooShort {
                length: initial_prompt.chars().count(),
            }));
        }
        Ok(Self {
            initial_prompt,
            scenes: Vec::new(),
            current_scene_index: 0,
            created_at: Utc::now(),
        })
    }

    /// Append a scene and point the current index at it.
    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
        self.current_scene_index = self.scenes.len() - 1;
    }

    /// The current active scene, or None if the story has no scenes.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.current_scene_index)
    }

    /// Mutable access to the current scene, for choice selection.
    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.scenes.get_mut(self.current_scene_index)
    }

    /// Total number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Bounded recent-scene context for prompt assembly.
    ///
    /// Returns the initial prompt plus the content and selected-choice
    /// text of the most recent `max_scenes` scenes, oldest first, each
    /// prefixed with its scene id. The model never sees more than this
    /// window.
    pub fn context_window(&self, max_scenes: usize) -> String {
        if self.scenes.is_empty() {
            return format!("Story Prompt: {}", self.initial_prompt);
        }

        let start = self.scenes.len().saturating_sub(max_scenes);
        let mut parts = vec![format!(
            "Story Prompt: {}\n\nStory so far:",
            self.initial_prompt
        )];

        for scene in &self.scenes[start..] {
            parts.push(format!("\nScene {}:", scene.id()));
            parts.push(scene.content().clone());
            if let Some(choice) = scene.selected_choice() {
                parts.push(format!("[Reader chose: {}]", choice.text()));
            }
        }

        parts.join("\n")
    }

    /// The text of every selected choice across the whole history, in
    /// order. Used for display and export, not for generation.
    pub fn story_path(&self) -> Vec<&str> {
        self.scenes
            .iter()
            .filter_map(|s| s.selected_choice())
            .map(|c| c.text().as_str())
            .collect()
    }

    /// True iff the current scene has a selected choice.
    pub fn is_ready_to_continue(&self) -> bool {
        self.current_scene()
            .is_some_and(|s| s.selected_choice_id().is_some())
    }

    /// True iff the current scene is a terminal scene.
    pub fn is_complete(&self) -> bool {
        self.current_scene().is_some_and(Scene::is_ending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_choices() -> Vec<Choice> {
        vec![
            Choice::new(1, "Enter the forest alone").unwrap(),
            Choice::new(2, "Walk around the perimeter").unwrap(),
        ]
    }

    fn scene(id: u32) -> Scene {
        Scene::new(id, format!("Scene {id} unfolds in the quiet valley."), two_choices()).unwrap()
    }

    #[test]
    fn seed_shorter_than_ten_chars_is_rejected() {
        assert!(Story::new("too short").is_err());
        assert!(Story::new("   padded seed   ").is_ok());
    }

    #[test]
    fn choice_text_floor_is_enforced() {
        assert!(Choice::new(1, "run away").is_err());
        assert!(Choice::new(1, "Run away from the dragon").is_ok());
    }

    #[test]
    fn one_choice_is_never_valid() {
        let one = vec![Choice::new(1, "Enter the forest alone").unwrap()];
        assert!(Scene::new(1, "A perfectly fine scene narrative.", one).is_err());
        assert!(Scene::new(1, "A perfectly fine scene narrative.", vec![]).is_ok());
    }

    #[test]
    fn add_scene_reindexes() {
        let mut story = Story::new("A detective in a haunted mansion").unwrap();
        for id in 1..=4 {
            story.add_scene(scene(id));
            assert_eq!(*story.current_scene_index(), story.scene_count() - 1);
        }
        assert_eq!(*story.current_scene().unwrap().id(), 4);
    }

    #[test]
    fn select_choice_is_one_way_and_rejects_unknown_ids() {
        let mut s = scene(1);
        assert!(!s.select_choice(99));
        assert_eq!(*s.selected_choice_id(), None);
        assert!(s.select_choice(2));
        assert_eq!(*s.selected_choice_id(), Some(2));
        assert_eq!(s.selected_choice().unwrap().text(), "Walk around the perimeter");
    }

    #[test]
    fn context_window_keeps_only_the_most_recent_scenes() {
        let mut story = Story::new("A detective in a haunted mansion").unwrap();
        for id in 1..=10 {
            story.add_scene(scene(id));
        }
        let ctx = story.context_window(3);
        assert!(ctx.contains("Story Prompt: A detective in a haunted mansion"));
        assert!(ctx.contains("Scene 8:"));
        assert!(ctx.contains("Scene 10:"));
        assert!(!ctx.contains("Scene 1 unfolds"));
        assert!(!ctx.contains("Scene 7:"));
    }

    #[test]
    fn context_window_includes_selected_choices() {
        let mut story = Story::new("A detective in a haunted mansion").unwrap();
        story.add_scene(scene(1));
        story.current_scene_mut().unwrap().select_choice(1);
        let ctx = story.context_window(3);
        assert!(ctx.contains("[Reader chose: Enter the forest alone]"));
    }

    #[test]
    fn story_path_collects_selections_in_order() {
        let mut story = Story::new("A detective in a haunted mansion").unwrap();
        story.add_scene(scene(1));
        story.current_scene_mut().unwrap().select_choice(2);
        story.add_scene(scene(2));
        story.current_scene_mut().unwrap().select_choice(1);
        story.add_scene(scene(3));
        assert_eq!(
            story.story_path(),
            vec!["Walk around the perimeter", "Enter the forest alone"]
        );
    }

    #[test]
    fn completion_is_derived_from_the_choice_list() {
        let mut story = Story::new("A detective in a haunted mansion").unwrap();
        story.add_scene(scene(1));
        assert!(!story.is_complete());
        story.current_scene_mut().unwrap().select_choice(1);
        assert!(story.is_ready_to_continue());
        story.add_scene(Scene::new(2, "The mansion finally falls silent forever.", vec![]).unwrap());
        assert!(story.is_complete());
        assert!(!story.is_ready_to_continue());
    }
}
