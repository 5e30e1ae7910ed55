//! Read-only comic-book projection of a finished story.
//!
//! Built on demand for export; never mutated by the engine. One page per
//! scene, one full-width panel per page, first page doubling as the cover.

use crate::{ArtStyle, ImageRef, Story};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single panel within a comic page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ComicPanel {
    /// Unique panel identifier across the book
    panel_id: u32,
    /// The scene this panel was projected from
    scene_id: u32,
    /// The panel illustration, if one was generated
    image: Option<ImageRef>,
    /// Narrative caption text
    caption: String,
    /// Page this panel belongs to
    page_number: u32,
}

/// A single page of the comic book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ComicPage {
    /// 1-based page number
    page_number: u32,
    /// Panels on this page, in reading order
    panels: Vec<ComicPanel>,
    /// Whether this page doubles as the cover
    is_cover: bool,
}

impl ComicPage {
    /// Number of panels on this page.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

/// The complete comic book structure projected from a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ComicBook {
    /// Book title, derived from the story seed
    title: String,
    /// All pages in order
    pages: Vec<ComicPage>,
    /// Art style the illustrations were generated in
    art_style: ArtStyle,
    /// The original story seed
    initial_prompt: String,
    /// Number of scenes in the source story
    total_scenes: usize,
    /// When the projection was built
    created_at: DateTime<Utc>,
}

impl ComicBook {
    /// Project a story into comic-book form: one page per scene, one
    /// full-width panel per page, the first page as the cover.
    pub fn from_story(story: &Story, art_style: ArtStyle) -> Self {
        let title = book_title(story.initial_prompt());

        let pages = story
            .scenes()
            .iter()
            .enumerate()
            .map(|(i, scene)| {
                let page_number = (i + 1) as u32;
                ComicPage {
                    page_number,
                    panels: vec![ComicPanel {
                        panel_id: page_number,
                        scene_id: *scene.id(),
                        image: scene.image().clone(),
                        caption: scene.content().clone(),
                        page_number,
                    }],
                    is_cover: i == 0,
                }
            })
            .collect();

        Self {
            title,
            pages,
            art_style,
            initial_prompt: story.initial_prompt().clone(),
            total_scenes: story.scene_count(),
            created_at: Utc::now(),
        }
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of panels across all pages.
    pub fn total_panels(&self) -> usize {
        self.pages.iter().map(ComicPage::panel_count).sum()
    }

    /// Look up a page by its 1-based number.
    pub fn page(&self, page_number: u32) -> Option<&ComicPage> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }
}

fn book_title(seed: &str) -> String {
    let head: String = seed.chars().take(30).collect();
    if seed.chars().count() > 30 {
        format!("Comic: {head}...")
    } else {
        format!("Comic: {head}")
    }
}

/// Map typographic punctuation to ASCII equivalents and drop anything
/// else outside ASCII, for export targets limited to Latin-1 fonts.
pub fn sanitize_for_print(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2026}' => out.push_str("..."),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2022}' => out.push('*'),
            '\u{2192}' => out.push_str("->"),
            '\u{2190}' => out.push_str("<-"),
            '\u{00a9}' => out.push_str("(c)"),
            '\u{00ae}' => out.push_str("(R)"),
            '\u{2122}' => out.push_str("(TM)"),
            '\u{00b0}' => out.push_str(" degrees"),
            '\u{00d7}' => out.push('x'),
            '\u{00f7}' => out.push('/'),
            '\u{2248}' => out.push('~'),
            '\u{2260}' => out.push_str("!="),
            '\u{2264}' => out.push_str("<="),
            '\u{2265}' => out.push_str(">="),
            '\u{00b1}' => out.push_str("+/-"),
            '\u{20ac}' => out.push_str("EUR"),
            '\u{00a3}' => out.push_str("GBP"),
            '\u{00a5}' => out.push_str("JPY"),
            '\u{20b9}' => out.push_str("INR"),
            '\u{200b}' => {}
            '\u{00a0}' => out.push(' '),
            c if c.is_ascii() => out.push(c),
            _ => {}
        }
    }
    out
}
