//! Orchestration behavior of the story engine.

mod common;

use common::{api_failure, ok, ScriptedImages, ScriptedText, BREAKDOWN, CHOICES, ENDING_SCENE, SCENE};
use inkbound_core::{GenerationConfig, ImageMode, Settings};
use inkbound_narrative::{GenerationClient, ImageClient, StoryEngine};
use inkbound_storage::FileImageStore;
use std::sync::Arc;
use tempfile::TempDir;

fn engine(script: Vec<inkbound_error::InkboundResult<String>>, settings: Settings) -> StoryEngine<ScriptedText> {
    let client = GenerationClient::new(ScriptedText::new(script), GenerationConfig::default());
    StoryEngine::new(client, None, settings)
}

#[tokio::test]
async fn start_produces_scene_one_with_two_choices() {
    let engine = engine(vec![ok(SCENE), ok(CHOICES)], Settings::default());
    let story = engine.start("A smuggler runs the night harbor").await.unwrap();

    assert_eq!(story.scene_count(), 1);
    let scene = story.current_scene().unwrap();
    assert_eq!(*scene.id(), 1);
    assert_eq!(scene.choices().len(), 2);
    assert!(!scene.is_ending());
    assert!(scene.image().is_none());
    assert!(scene.image_prompt().is_none());
    assert!(!story.is_complete());
}

#[tokio::test]
async fn short_seed_is_rejected_before_any_generation() {
    let engine = engine(vec![], Settings::default());
    assert!(engine.start("too short").await.is_err());
}

#[tokio::test]
async fn advance_appends_scenes_with_increasing_ids() {
    let engine = engine(
        vec![ok(SCENE), ok(CHOICES), ok(SCENE), ok(CHOICES)],
        Settings::default(),
    );
    let mut story = engine.start("A smuggler runs the night harbor").await.unwrap();
    let scene = engine.advance(&mut story, 1).await.unwrap();

    assert_eq!(*scene.id(), 2);
    assert_eq!(story.scene_count(), 2);
    assert_eq!(story.story_path().len(), 1);
}

#[tokio::test]
async fn invalid_choice_id_leaves_the_story_unchanged() {
    let engine = engine(vec![ok(SCENE), ok(CHOICES)], Settings::default());
    let mut story = engine.start("A smuggler runs the night harbor").await.unwrap();

    assert!(engine.advance(&mut story, 7).await.is_err());
    assert_eq!(story.scene_count(), 1);
    assert_eq!(*story.current_scene().unwrap().selected_choice_id(), None);
}

#[tokio::test]
async fn length_cap_of_three_ends_on_the_second_advance() {
    let engine = engine(
        vec![ok(SCENE), ok(CHOICES), ok(SCENE), ok(CHOICES), ok(ENDING_SCENE)],
        Settings::default().with_max_story_length(3),
    );
    let mut story = engine.start("A smuggler runs the night harbor").await.unwrap();

    engine.advance(&mut story, 1).await.unwrap();
    assert!(!story.is_complete());

    let ending = engine.advance(&mut story, 2).await.unwrap();
    assert_eq!(*ending.id(), 3);
    assert!(ending.is_ending());
    assert!(ending.choices().is_empty());
    assert!(story.is_complete());
}

#[tokio::test(start_paused = true)]
async fn failed_round_appends_nothing() {
    let engine = engine(
        vec![
            ok(SCENE),
            ok(CHOICES),
            ok(SCENE),
            api_failure("down"),
            api_failure("down"),
            api_failure("down"),
        ],
        Settings::default(),
    );
    let mut story = engine.start("A smuggler runs the night harbor").await.unwrap();

    assert!(engine.advance(&mut story, 1).await.is_err());
    assert_eq!(story.scene_count(), 1);
}

#[tokio::test]
async fn panel_mode_records_prompt_even_when_providers_fail() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileImageStore::new(dir.path()).unwrap());
    let images = ImageClient::new(vec![Arc::new(ScriptedImages::failing("primary"))], store);

    let client = GenerationClient::new(
        ScriptedText::new(vec![ok(SCENE), ok(CHOICES)]),
        GenerationConfig::default(),
    );
    let engine = StoryEngine::new(client, Some(images), Settings::default());
    let story = engine.start("A smuggler runs the night harbor").await.unwrap();

    let scene = story.current_scene().unwrap();
    assert!(scene.image().is_none());
    let prompt = scene.image_prompt().as_deref().unwrap();
    assert!(prompt.contains("single comic book panel"));
}

#[tokio::test]
async fn page_mode_stores_title_and_breakdown_on_success() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileImageStore::new(dir.path()).unwrap());
    let provider = Arc::new(ScriptedImages::succeeding("imagen", vec![1u8; 4096]));
    let prompts = provider.prompts.clone();
    let images = ImageClient::new(vec![provider], store);

    let client = GenerationClient::new(
        ScriptedText::new(vec![ok(SCENE), ok(CHOICES), ok("The Fog Closes In"), ok(BREAKDOWN)]),
        GenerationConfig::default(),
    );
    let settings = Settings::default().with_image_mode(ImageMode::Page);
    let engine = StoryEngine::new(client, Some(images), settings);

    let story = engine.start("A smuggler runs the night harbor").await.unwrap();
    let scene = story.current_scene().unwrap();

    assert_eq!(scene.title().as_deref(), Some("The Fog Closes In"));
    assert_eq!(scene.panel_breakdown().as_ref().unwrap().len(), 2);
    assert!(scene.image().is_some());

    let sent = prompts.lock().unwrap();
    assert!(sent[0].contains("SEQUENTIAL PANEL BREAKDOWN"));
    assert!(sent[0].contains("PAGE TITLE: \"The Fog Closes In\""));
}

#[tokio::test(start_paused = true)]
async fn page_mode_falls_back_to_the_simple_prompt() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileImageStore::new(dir.path()).unwrap());
    let provider = Arc::new(ScriptedImages::succeeding("imagen", vec![1u8; 4096]));
    let prompts = provider.prompts.clone();
    let images = ImageClient::new(vec![provider], store);

    // Title succeeds; the breakdown response has no panel blocks at all,
    // which fails parsing without consuming the retry budget.
    let client = GenerationClient::new(
        ScriptedText::new(vec![
            ok(SCENE),
            ok(CHOICES),
            ok("The Fog Closes In"),
            ok("The model rambled about the scene instead of giving panels."),
        ]),
        GenerationConfig::default(),
    );
    let settings = Settings::default().with_image_mode(ImageMode::Page);
    let engine = StoryEngine::new(client, Some(images), settings);

    let story = engine.start("A smuggler runs the night harbor").await.unwrap();
    let scene = story.current_scene().unwrap();

    assert!(scene.panel_breakdown().is_none());
    assert!(scene.title().is_none());
    assert!(scene.image().is_some());

    let sent = prompts.lock().unwrap();
    assert!(sent[0].contains("AUTOMATIC PANEL BREAKDOWN"));
}
