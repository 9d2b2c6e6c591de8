#![allow(dead_code)]

// Prompt template for guided story generation.

/// Story prompt. Replace `{language}`, `{level}` and `{parts}`.
pub const STORY_PROMPT_TEMPLATE: &str = r#"Write a short story in {language} for a {level} level learner, split into exactly {parts} parts. Each part is one or two simple sentences the learner will read aloud.

Return ONLY a JSON object with this exact structure:
{
  "story": {
    "title": "the story title in {language}",
    "title_english": "english translation of the title",
    "parts": [
      {
        "part_number": 1,
        "content": "this part of the story in {language}",
        "translation": "english translation of this part",
        "description": "a short visual description of the scene in english"
      }
    ]
  }
}

Do not include any text outside the JSON object."#;
