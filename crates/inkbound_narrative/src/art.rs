//! Image-generation prompt templates.
//!
//! Like [`prompts`](crate::prompts), these are pure functions. Panel
//! prompts describe one illustration per scene; page prompts describe a
//! full multi-panel comic page, with a simpler single-prompt fallback
//! when no structured breakdown is available.

use inkbound_core::{ArtStyle, PanelDescriptor};

/// Prompt for a single-panel scene illustration.
pub fn panel_prompt(scene_text: &str, style: ArtStyle) -> String {
    format!(
        "Create a single comic book panel illustration:\n\
         \n\
         SCENE TO ILLUSTRATE: {scene_text}\n\
         \n\
         ART STYLE: {style_desc}\n\
         \n\
         COMPOSITION REQUIREMENTS:\n\
         - Single panel, no panel borders or frames\n\
         - Cinematic wide-angle composition (16:9)\n\
         - Dynamic perspective and dramatic angles\n\
         - Focus on the key moment of the scene\n\
         - Rich environmental details\n\
         - Expressive character poses and faces\n\
         - Professional comic book quality artwork\n\
         \n\
         MUST NOT INCLUDE:\n\
         - Any text, words, or letters\n\
         - Speech bubbles or thought bubbles\n\
         - Captions or narration boxes\n\
         - Watermarks or signatures\n\
         - Multiple panels or comic strips\n\
         \n\
         Generate a visually stunning comic panel that captures the essence of this scene.",
        style_desc = style.description(),
    )
}

/// Layout description keyed by panel count.
fn layout(panel_count: usize) -> &'static str {
    match panel_count {
        0..=2 => "two equal horizontal panels stacked vertically",
        3 => "three panels - one large on top, two smaller below",
        4 => "classic 2x2 grid layout with equal sized panels",
        _ => "dynamic layout with one large hero panel and four smaller panels around it",
    }
}

/// Structured multi-panel page prompt built from a parsed breakdown.
pub fn page_prompt(
    title: &str,
    scene_text: &str,
    panels: &[PanelDescriptor],
    style: ArtStyle,
) -> String {
    let panel_count = panels.len();
    let context: String = scene_text.chars().take(500).collect();

    let mut prompt = format!(
        "GENERATE A PROFESSIONAL MULTI-PANEL COMIC BOOK PAGE\n\
         \n\
         PAGE TITLE: \"{title}\"\n\
         \n\
         STORY CONTEXT FOR THIS PAGE:\n\
         {context}\n\
         \n\
         LAYOUT STRUCTURE:\n\
         - Total panels: {panel_count}\n\
         - Arrangement: {layout}\n\
         - Clear black panel borders with white gutters between panels\n\
         - 16:9 landscape overall page aspect ratio\n\
         \n\
         ART STYLE (consistent across ALL panels):\n\
         {style_desc}\n\
         \n\
         SEQUENTIAL PANEL BREAKDOWN:\n",
        layout = layout(panel_count),
        style_desc = style.description(),
    );

    for (i, panel) in panels.iter().enumerate() {
        prompt.push_str(&format!(
            "\n=== PANEL {number} ===\n\
             VISUAL SCENE: {visual}\n\
             CHARACTER ACTION: {action}\n\
             CAMERA ANGLE: {camera}\n\
             EMOTIONAL TONE: {emotion}\n",
            number = i + 1,
            visual = panel.visual(),
            action = panel.action(),
            camera = panel.camera(),
            emotion = panel.emotion(),
        ));
        if let Some(dialogue) = panel.dialogue() {
            prompt.push_str(&format!("SPEECH BUBBLE TEXT: \"{dialogue}\"\n"));
        }
    }

    prompt.push_str(&format!(
        "\nCRITICAL CONSISTENCY REQUIREMENTS:\n\
         1. IDENTICAL character designs in every panel (same face shape, hair, outfit, body type)\n\
         2. Consistent environment/setting details throughout the page\n\
         3. Logical visual progression from panel 1 to panel {panel_count}\n\
         4. Each panel shows a DIFFERENT moment in the sequence (no duplicates)\n\
         5. Professional comic illustration quality with polished finish\n\
         \n\
         STRICT RESTRICTIONS:\n\
         - NO distorted or inconsistent anatomy\n\
         - NO random floating objects or elements\n\
         - NO unclear actions or confusing staging\n\
         - NO missing panel borders\n\
         - ALL panels must be clearly separated and distinct"
    ));

    prompt
}

/// Single-prompt page generator used when the structured breakdown is
/// unavailable; the image model picks the panel content itself.
pub fn simple_page_prompt(scene_text: &str, style: ArtStyle, panel_count: usize) -> String {
    format!(
        "GENERATE A {panel_count}-PANEL COMIC BOOK PAGE\n\
         \n\
         SCENE TO ILLUSTRATE:\n\
         {scene_text}\n\
         \n\
         LAYOUT STRUCTURE:\n\
         - Total panels: {panel_count}\n\
         - Arrangement: {layout}\n\
         - Clear black panel borders with white gutters\n\
         - 16:9 landscape overall page aspect ratio\n\
         \n\
         ART STYLE:\n\
         {style_desc}\n\
         \n\
         AUTOMATIC PANEL BREAKDOWN INSTRUCTIONS:\n\
         1. Read the scene and identify {panel_count} KEY SEQUENTIAL MOMENTS\n\
         2. Panel 1: Opening/setup moment of the scene\n\
         3. Middle panels: Rising action and key developments\n\
         4. Final panel: Climax or closing moment\n\
         \n\
         CRITICAL REQUIREMENTS:\n\
         - IDENTICAL character designs across ALL {panel_count} panels\n\
         - Clear visual storytelling progression from start to finish\n\
         - Each panel captures a DISTINCT moment (no repetition)\n\
         - Dynamic varied compositions (different angles, distances)\n\
         - Professional comic book illustration quality\n\
         \n\
         RESTRICTIONS:\n\
         - NO distorted anatomy or inconsistent character designs\n\
         - NO confusing compositions or unclear actions\n\
         - NO missing or broken panel borders\n\
         - ALL panels must be visually distinct and properly separated",
        layout = layout(panel_count),
        style_desc = style.description(),
    )
}
