//! Parsers for the tag formats the prompts request.
//!
//! Model output is free text; these functions recover the structure the
//! prompts asked for and reject responses that drifted from the format.

use inkbound_core::PanelDescriptor;
use inkbound_error::{ParseError, ParseErrorKind};

/// Extract the two choices from a `CHOICE_1:` / `CHOICE_2:` response.
///
/// # Errors
///
/// Returns an error if either tag is missing, either text is empty after
/// trimming, or the two choices are equal ignoring case.
pub fn parse_choices(raw: &str) -> Result<(String, String), ParseError> {
    let mut choice_1 = None;
    let mut choice_2 = None;

    for line in raw.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("CHOICE_1:") {
            choice_1 = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("CHOICE_2:") {
            choice_2 = Some(rest.trim().to_string());
        }
    }

    let (Some(choice_1), Some(choice_2)) = (choice_1, choice_2) else {
        return Err(ParseError::new(ParseErrorKind::MissingChoiceTag));
    };

    if choice_1.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyChoice(1)));
    }
    if choice_2.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyChoice(2)));
    }
    if choice_1.to_lowercase() == choice_2.to_lowercase() {
        return Err(ParseError::new(ParseErrorKind::IdenticalChoices));
    }

    Ok((choice_1, choice_2))
}

/// Strip markdown emphasis and drop lines that look like leaked choices
/// or meta-commentary, joining the survivors with blank lines.
///
/// Idempotent: cleaning already-clean text is a no-op.
pub fn clean_scene_text(raw: &str) -> String {
    let stripped = raw.replace("**", "").replace('*', "");

    let kept: Vec<&str> = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            !(line.starts_with("CHOICE")
                || line.starts_with("Option")
                || line.starts_with('[')
                || lower.starts_with("what do you")
                || lower.starts_with("what will you"))
        })
        .collect();

    kept.join("\n\n")
}

/// Parse a `PANEL_n:` tagged breakdown into panel descriptors.
///
/// A `DIALOGUE:` value of `none` (case-insensitive) or an absent tag maps
/// to a silent panel.
///
/// # Errors
///
/// Returns an error when no panel blocks are recovered.
pub fn parse_panel_breakdown(raw: &str) -> Result<Vec<PanelDescriptor>, ParseError> {
    struct Builder {
        visual: String,
        action: String,
        camera: String,
        emotion: String,
        dialogue: Option<String>,
    }

    impl Builder {
        fn new() -> Self {
            Self {
                visual: String::new(),
                action: String::new(),
                camera: String::new(),
                emotion: String::new(),
                dialogue: None,
            }
        }

        fn finish(self) -> PanelDescriptor {
            PanelDescriptor::new(self.visual, self.action, self.camera, self.emotion, self.dialogue)
        }
    }

    let mut panels = Vec::new();
    let mut current: Option<Builder> = None;

    for line in raw.lines().map(str::trim) {
        if is_panel_header(line) {
            if let Some(done) = current.take() {
                panels.push(done.finish());
            }
            current = Some(Builder::new());
            continue;
        }

        let Some(builder) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("VISUAL:") {
            builder.visual = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("ACTION:") {
            builder.action = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("CAMERA:") {
            builder.camera = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("EMOTION:") {
            builder.emotion = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("DIALOGUE:") {
            let text = rest.trim().trim_matches('"').to_string();
            if !text.is_empty() && !text.eq_ignore_ascii_case("none") {
                builder.dialogue = Some(text);
            }
        }
    }

    if let Some(done) = current.take() {
        panels.push(done.finish());
    }

    if panels.is_empty() {
        return Err(ParseError::new(ParseErrorKind::NoPanels));
    }

    Ok(panels)
}

/// `PANEL_3:` or `PANEL 3:` headers, with or without trailing text.
fn is_panel_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("PANEL") else {
        return false;
    };
    let rest = rest.trim_start_matches(['_', ' ']);
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    !digits.is_empty() && rest[digits.len()..].starts_with(':')
}

/// First non-empty line of a title response, surrounding quotes stripped.
/// Never fails; an all-whitespace response yields an empty string.
pub fn parse_title(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_matches(['"', '\'']).trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_parse_from_tagged_lines() {
        let raw = "Here you go:\nCHOICE_1: Climb the crumbling stairs quietly\nCHOICE_2: Shout a warning into the dark\n";
        let (a, b) = parse_choices(raw).unwrap();
        assert_eq!(a, "Climb the crumbling stairs quietly");
        assert_eq!(b, "Shout a warning into the dark");
    }

    #[test]
    fn missing_tag_is_an_error() {
        let err = parse_choices("CHOICE_1: only one option here").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingChoiceTag);
    }

    #[test]
    fn empty_choice_is_an_error() {
        let err = parse_choices("CHOICE_1: \nCHOICE_2: go east now").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyChoice(1));
    }

    #[test]
    fn case_insensitive_duplicates_are_rejected() {
        let err = parse_choices("CHOICE_1: Open The Door\nCHOICE_2: open the door").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::IdenticalChoices);
    }

    #[test]
    fn cleaning_strips_markdown_and_leaked_choices() {
        let raw = "**The storm** breaks over the *harbor*.\n\nCHOICE_1: leaked\nOption A: also leaked\n[meta note]\nWhat do you do next?\nShe runs for the pier.";
        let cleaned = clean_scene_text(raw);
        assert_eq!(cleaned, "The storm breaks over the harbor.\n\nShe runs for the pier.");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let raw = "**Bold** start.\nWhat will you choose?\nA second line.";
        let once = clean_scene_text(raw);
        assert_eq!(clean_scene_text(&once), once);
    }

    #[test]
    fn panel_breakdown_parses_blocks_and_none_dialogue() {
        let raw = "PANEL_1:\nVISUAL: A rooftop at dusk\nACTION: The thief leaps\nCAMERA: wide shot\nEMOTION: exhilarated\nDIALOGUE: none\n\nPANEL_2:\nVISUAL: A skylight below\nACTION: She lands hard\nCAMERA: close-up\nEMOTION: pained\nDIALOGUE: \"Almost there.\"";
        let panels = parse_panel_breakdown(raw).unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].visual(), "A rooftop at dusk");
        assert!(panels[0].dialogue().is_none());
        assert_eq!(panels[1].dialogue().as_deref(), Some("Almost there."));
    }

    #[test]
    fn panel_headers_tolerate_spaces() {
        let raw = "PANEL 1:\nVISUAL: something\nACTION: moves\nCAMERA: medium\nEMOTION: calm";
        assert_eq!(parse_panel_breakdown(raw).unwrap().len(), 1);
    }

    #[test]
    fn breakdown_with_no_panels_is_an_error() {
        let err = parse_panel_breakdown("The model rambled instead of panels.").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoPanels);
    }

    #[test]
    fn title_takes_first_line_and_strips_quotes() {
        assert_eq!(parse_title("\n  \"The Rooftop Gambit\"  \nextra line"), "The Rooftop Gambit");
        assert_eq!(parse_title("   \n \n"), "");
    }
}
