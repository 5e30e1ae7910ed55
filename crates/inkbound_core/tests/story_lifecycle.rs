//! End-to-end exercise of the story data model: build a playthrough,
//! serialize it, and project it into a comic book.

use inkbound_core::{ArtStyle, Choice, ComicBook, Scene, Story};

fn choices() -> Vec<Choice> {
    vec![
        Choice::new(1, "Follow the stranger into the alley").unwrap(),
        Choice::new(2, "Stay under the streetlight and wait").unwrap(),
    ]
}

#[test]
fn full_playthrough_round_trips_through_json() {
    let mut story = Story::new("A courier carries a sealed letter").unwrap();

    let scene = Scene::new(1, "Rain hammers the cobblestones as the courier hesitates.", choices())
        .unwrap();
    story.add_scene(scene);
    assert!(story.current_scene_mut().unwrap().select_choice(1));

    let scene = Scene::new(2, "The alley swallows the lamplight behind them.", choices()).unwrap();
    story.add_scene(scene);
    assert!(story.current_scene_mut().unwrap().select_choice(2));

    let ending = Scene::new(3, "The letter changes hands, and the city exhales.", vec![]).unwrap();
    story.add_scene(ending);

    assert!(story.is_complete());
    assert_eq!(story.scene_count(), 3);
    assert_eq!(
        story.story_path(),
        vec![
            "Follow the stranger into the alley",
            "Stay under the streetlight and wait",
        ]
    );

    let json = serde_json::to_string(&story).unwrap();
    let restored: Story = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, story);
    assert!(restored.is_complete());
}

#[test]
fn comic_projection_preserves_scene_order() {
    let mut story = Story::new("A courier carries a sealed letter").unwrap();
    for id in 1..=4u32 {
        let mut scene =
            Scene::new(id, format!("Scene {id}: the courier presses on regardless."), choices())
                .unwrap();
        scene.select_choice(1);
        story.add_scene(scene);
    }

    let comic = ComicBook::from_story(&story, ArtStyle::GraphicNovel);
    assert_eq!(comic.page_count(), 4);
    let scene_ids: Vec<u32> = comic
        .pages()
        .iter()
        .flat_map(|p| p.panels().iter().map(|panel| *panel.scene_id()))
        .collect();
    assert_eq!(scene_ids, vec![1, 2, 3, 4]);
}
