//! Retry and fallback behavior of the generation clients.

mod common;

use common::{api_failure, ok, ScriptedImages, ScriptedText, CHOICES, SCENE};
use inkbound_core::GenerationConfig;
use inkbound_error::InkboundErrorKind;
use inkbound_narrative::{GenerationClient, ImageClient, RetryPolicy, FALLBACK_TITLE};
use inkbound_storage::{FileImageStore, ImageStore};
use std::sync::Arc;
use tempfile::TempDir;

fn client(provider: ScriptedText) -> GenerationClient<ScriptedText> {
    GenerationClient::new(provider, GenerationConfig::default())
}

#[tokio::test(start_paused = true)]
async fn transient_failures_are_retried_until_success() {
    let c = client(ScriptedText::new(vec![
        api_failure("rate limited"),
        api_failure("rate limited"),
        ok(SCENE),
    ]));

    let text = c.generate_text("prompt").await.unwrap();
    assert_eq!(text, SCENE);
    assert_eq!(c.provider().calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn empty_output_counts_as_a_failed_attempt() {
    let c = client(ScriptedText::new(vec![ok("   "), ok(SCENE)]));
    assert_eq!(c.generate_text("prompt").await.unwrap(), SCENE);
    assert_eq!(c.provider().calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn exhaustion_reports_attempts_and_last_error() {
    let c = client(ScriptedText::new(vec![
        api_failure("first"),
        api_failure("second"),
        api_failure("final straw"),
    ]));

    let err = c.generate_text("prompt").await.unwrap_err();
    assert_eq!(c.provider().calls(), 3);
    let message = format!("{err}");
    assert!(message.contains("after 3 attempts"));
    assert!(message.contains("final straw"));
}

#[tokio::test(start_paused = true)]
async fn custom_attempt_budget_is_honored() {
    let c = client(ScriptedText::new(vec![api_failure("down")]))
        .with_retry(RetryPolicy::default().with_max_attempts(1));
    assert!(c.generate_text("prompt").await.is_err());
    assert_eq!(c.provider().calls(), 1);
}

#[tokio::test]
async fn short_scene_text_is_a_validation_error() {
    let c = client(ScriptedText::new(vec![ok("Too short to be a scene.")]));
    let err = c.generate_scene_text("prompt").await.unwrap_err();
    assert!(matches!(err.kind(), InkboundErrorKind::Validation(_)));
}

#[tokio::test]
async fn choices_are_parsed_and_floor_checked() {
    let c = client(ScriptedText::new(vec![ok(CHOICES)]));
    let (a, b) = c.generate_choices("prompt").await.unwrap();
    assert!(a.starts_with("Signal the lighthouse"));
    assert!(b.starts_with("Cut the engine"));

    let c = client(ScriptedText::new(vec![ok("CHOICE_1: run\nCHOICE_2: hide away now")]));
    let err = c.generate_choices("prompt").await.unwrap_err();
    assert!(matches!(err.kind(), InkboundErrorKind::Validation(_)));
}

#[tokio::test(start_paused = true)]
async fn title_failure_falls_back_instead_of_erroring() {
    let c = client(ScriptedText::new(vec![api_failure("down"), api_failure("down")]));
    assert_eq!(c.generate_scene_title("scene").await, FALLBACK_TITLE);
    // Titles get a reduced two-attempt budget.
    assert_eq!(c.provider().calls(), 2);
}

#[tokio::test]
async fn title_success_is_trimmed_of_quotes() {
    let c = client(ScriptedText::new(vec![ok("\"The Fog Closes In\"")]));
    assert_eq!(c.generate_scene_title("scene").await, "The Fog Closes In");
}

#[tokio::test]
async fn image_chain_falls_through_to_the_next_provider() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn ImageStore> = Arc::new(FileImageStore::new(dir.path()).unwrap());

    let dead = Arc::new(ScriptedImages::failing("primary"));
    let live = Arc::new(ScriptedImages::succeeding("fallback", vec![9u8; 4096]));
    let dead_prompts = dead.prompts.clone();
    let live_prompts = live.prompts.clone();

    let images = ImageClient::new(vec![dead, live], store.clone());
    let reference = images.generate("a foggy pier", 2).await.unwrap();

    assert_eq!(dead_prompts.lock().unwrap().len(), 1);
    assert_eq!(live_prompts.lock().unwrap().len(), 1);
    assert_eq!(store.retrieve(&reference).await.unwrap(), vec![9u8; 4096]);
}

#[tokio::test]
async fn image_chain_exhaustion_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn ImageStore> = Arc::new(FileImageStore::new(dir.path()).unwrap());

    let images = ImageClient::new(
        vec![
            Arc::new(ScriptedImages::failing("primary")),
            Arc::new(ScriptedImages::failing("fallback")),
        ],
        store,
    );

    assert!(images.generate("a foggy pier", 1).await.is_none());
}
