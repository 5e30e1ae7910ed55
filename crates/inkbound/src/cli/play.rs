//! Interactive playthrough command handler.

use crate::cli::PlayArgs;
use inkbound_core::{ComicBook, Scene, Settings, Story};
use inkbound_models::{
    GeminiTextProvider, ImagenProvider, PollinationsEndpoint, PollinationsProvider,
};
use inkbound_narrative::{GenerationClient, ImageClient, StoryEngine};
use inkbound_storage::FileImageStore;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Run an interactive playthrough until the story ends or the reader
/// quits.
pub async fn run_play(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::from_env()?
        .with_art_style(args.style)
        .with_image_mode(args.mode);
    if let Some(max_length) = args.max_length {
        settings = settings.with_max_story_length(max_length);
    }

    let provider = GeminiTextProvider::new(settings.model_name())?;
    let client = GenerationClient::new(provider, settings.generation().clone());

    let images = if args.no_images {
        None
    } else {
        Some(build_image_client(&args)?)
    };

    let engine = StoryEngine::new(client, images, settings);

    println!("Generating opening scene...\n");
    let mut story = engine.start(&args.seed).await?;
    print_scene(story.current_scene().ok_or("story has no opening scene")?);

    while !story.is_complete() {
        let Some(choice_id) = read_choice()? else {
            println!("\nStopping here. The story remains unfinished.");
            break;
        };

        println!("\nGenerating the next scene...\n");
        match engine.advance(&mut story, choice_id).await {
            Ok(scene) => print_scene(scene),
            Err(e) => {
                // The round failed cleanly; the reader can pick again.
                eprintln!("That didn't work: {e}");
            }
        }
    }

    if story.is_complete() {
        println!("\n=== THE END ===");
        println!("Scenes: {}", story.scene_count());
    }

    if let Some(out) = args.out {
        export_json(&story, args.style, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

fn build_image_client(args: &PlayArgs) -> Result<ImageClient, Box<dyn std::error::Error>> {
    let store = Arc::new(FileImageStore::new(&args.images_dir)?);

    let mut providers: Vec<Arc<dyn inkbound_interface::ImageProvider>> = Vec::new();
    match ImagenProvider::new() {
        Ok(imagen) => providers.push(Arc::new(imagen)),
        Err(e) => tracing::warn!(error = %e, "Imagen unavailable, using Pollinations only"),
    }
    providers.push(Arc::new(PollinationsProvider::new(PollinationsEndpoint::Primary)?));
    providers.push(Arc::new(PollinationsProvider::new(PollinationsEndpoint::Alternate)?));

    Ok(ImageClient::new(providers, store))
}

fn print_scene(scene: &Scene) {
    if let Some(title) = scene.title() {
        println!("--- {title} ---\n");
    }
    println!("{}\n", scene.content());

    if let Some(image) = scene.image() {
        println!("[illustration: {}]\n", image.path().display());
    }

    for choice in scene.choices() {
        println!("  {}) {}", choice.id(), choice.text());
    }
}

/// Read 1 or 2 from stdin; `q` (or EOF) means stop.
fn read_choice() -> Result<Option<u32>, Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    loop {
        print!("\nYour choice [1/2, q to quit]: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim() {
            "1" => return Ok(Some(1)),
            "2" => return Ok(Some(2)),
            "q" | "Q" => return Ok(None),
            other => println!("Unrecognized input {other:?}; enter 1, 2, or q."),
        }
    }
}

fn export_json(
    story: &Story,
    style: inkbound_core::ArtStyle,
    out: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let comic = ComicBook::from_story(story, style);
    let payload = serde_json::json!({
        "story": story,
        "comic": comic,
    });
    std::fs::write(out, serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}
