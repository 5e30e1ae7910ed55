//! Text-generation prompt templates.
//!
//! Pure functions from story state to prompt strings; no I/O, no
//! randomness. Every narrative prompt asks for third-person observer
//! narration so scenes read like comic captions rather than addressing
//! the reader.

/// Prompt for the opening scene of a new story.
pub fn opening(seed: &str) -> String {
    format!(
        "You are a creative storytelling AI. Create an engaging opening scene for an \
         interactive story.\n\
         \n\
         Story Premise: {seed}\n\
         \n\
         Instructions:\n\
         1. Write a brief, engaging opening scene (3-5 sentences max)\n\
         2. Narrate in third person, as an observer following the protagonist\n\
         3. Set the atmosphere and introduce the situation concisely\n\
         4. End at a decision point where a choice must be made\n\
         5. Make it vivid but concise\n\
         6. Use present tense for immediacy\n\
         7. Don't include any choices in the scene text itself\n\
         \n\
         Write ONLY the scene narrative in 3-5 sentences. Do not include choices, \
         options, or meta-commentary."
    )
}

/// Prompt for the next scene after a choice, when the story continues.
pub fn continuation(context: &str, chosen_direction: &str) -> String {
    format!(
        "You are continuing an interactive story. Write the next scene based on the \
         chosen direction.\n\
         \n\
         {context}\n\
         \n\
         The reader chose: \"{chosen_direction}\"\n\
         \n\
         Instructions:\n\
         1. Write the next scene (3-5 sentences max) that follows naturally from the choice\n\
         2. Narrate in third person, as an observer following the protagonist\n\
         3. Show the consequences and developments from the decision\n\
         4. Maintain consistency with previous events\n\
         5. End at another decision point\n\
         6. Use vivid, descriptive language but keep it concise\n\
         7. Use present tense\n\
         \n\
         Write ONLY the scene narrative in 3-5 sentences. Do not include choices, \
         options, or meta-commentary."
    )
}

/// Prompt for the closing scene, once the length cap is reached.
pub fn ending(context: &str, chosen_direction: &str) -> String {
    format!(
        "You are concluding an interactive story. Write a satisfying ending scene.\n\
         \n\
         {context}\n\
         \n\
         The reader's final choice: \"{chosen_direction}\"\n\
         \n\
         Instructions:\n\
         1. Write a conclusive scene (4-6 sentences max)\n\
         2. Narrate in third person, as an observer following the protagonist\n\
         3. Resolve the main story threads\n\
         4. Provide a satisfying emotional payoff\n\
         5. Reference key moments from the journey briefly\n\
         6. Use vivid, impactful language but keep it concise\n\
         7. Use present tense\n\
         \n\
         This is the final scene - do not end with a cliffhanger or new choices.\n\
         Write ONLY the ending scene narrative in 4-6 sentences."
    )
}

/// Prompt for exactly two forward-looking choices after a scene.
///
/// The response must use the fixed `CHOICE_1:` / `CHOICE_2:` line format
/// that [`parse::parse_choices`](crate::parse::parse_choices) expects.
pub fn choices(scene_text: &str, context: &str) -> String {
    format!(
        "You are creating choices for an interactive story. Generate exactly 2 \
         distinct, interesting options.\n\
         \n\
         Story Context:\n\
         {context}\n\
         \n\
         Current Scene:\n\
         {scene_text}\n\
         \n\
         Instructions:\n\
         1. Create exactly 2 different choices\n\
         2. Each choice should be 8-15 words\n\
         3. Make choices meaningful and lead to different outcomes\n\
         4. Choices should be action-oriented\n\
         5. Make both options interesting (avoid obvious good/bad choices)\n\
         6. Choices should feel natural to the situation\n\
         \n\
         Format your response EXACTLY as:\n\
         CHOICE_1: [first choice text here]\n\
         CHOICE_2: [second choice text here]\n\
         \n\
         Do not add any other text, explanations, or formatting."
    )
}

/// Prompt for a panel-by-panel breakdown of a scene, for page-mode
/// illustration.
pub fn panel_breakdown(scene_text: &str, panel_count: usize) -> String {
    format!(
        "You are a comic book editor. Break the following scene into {panel_count} \
         sequential panels for a single comic page.\n\
         \n\
         Scene:\n\
         {scene_text}\n\
         \n\
         Instructions:\n\
         1. Create exactly {panel_count} panels covering the scene in order\n\
         2. Each panel is one distinct visual moment, no repetition\n\
         3. Vary camera angles and distances across panels\n\
         4. Dialogue is optional; write none when the panel is silent\n\
         \n\
         Format your response EXACTLY as, repeating for each panel:\n\
         PANEL_1:\n\
         VISUAL: [what the panel shows]\n\
         ACTION: [what the characters are doing]\n\
         CAMERA: [camera angle or framing]\n\
         EMOTION: [emotional tone]\n\
         DIALOGUE: [short speech bubble text, or none]\n\
         \n\
         Do not add any other text, explanations, or formatting."
    )
}

/// Prompt for a short page title for a scene.
pub fn title(scene_text: &str) -> String {
    format!(
        "Write a short, catchy title for this comic page scene (3-6 words).\n\
         \n\
         Scene:\n\
         {scene_text}\n\
         \n\
         Respond with ONLY the title. No quotes, no explanation, nothing else."
    )
}
