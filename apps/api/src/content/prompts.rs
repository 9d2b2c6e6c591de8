#![allow(dead_code)]

// Prompt templates for the content generators.
// Placeholders use `{name}` markers; replace before sending.

/// Daily flashcard prompt. Replace `{language}` and `{level}`.
pub const DAILIES_PROMPT_TEMPLATE: &str = r#"Generate 10 new concepts or phrases for learning {language} at {level} level.

Return ONLY a JSON object with this exact structure:
{
  "cards": [
    {
      "new_concept": "the concept or phrase in {language}",
      "concept_pronunciation": "english-friendly pronunciation of the concept",
      "english": "english translation of the concept",
      "meaning": "a short explanation of what it means and when to use it",
      "example": "an example sentence in {language} using the concept",
      "example_pronunciation": "english-friendly pronunciation of the example sentence",
      "translation": "english translation of the example sentence"
    }
  ]
}

Do not include any text outside the JSON object."#;

/// Memory-game pair prompt. Replace `{language}` and `{level}`.
pub const MEMORY_PAIRS_PROMPT_TEMPLATE: &str = r#"Generate 10 words or short phrases for a memory matching game in {language}, appropriate for a {level} level learner.

Return ONLY a JSON object with this exact structure:
{
  "pairs": [
    ["word or phrase in {language}", "english translation", "english-friendly pronunciation"]
  ]
}

Each pair must be a three-element array in exactly that order.
Do not include any text outside the JSON object."#;

/// Teaching-chat prompt. Replace `{language}` and `{query}`.
pub const CHAT_PROMPT_TEMPLATE: &str = r#"You are a friendly {language} teacher. A learner asks:

{query}

Answer in english, keeping the explanation short and practical.

Return ONLY a JSON object with this exact structure:
{
  "response": "your answer to the question",
  "examples": "two short usage examples in {language} with translations",
  "interesting_facts": "one or two brief facts related to the question"
}

Do not include any text outside the JSON object."#;

/// Tongue-twister prompt. Replace `{language}`.
pub const TONGUE_TWISTERS_PROMPT_TEMPLATE: &str = r#"Generate 5 well-known tongue twisters in {language}.

Return ONLY a JSON object with this exact structure:
{
  "tongue_twisters": [
    {
      "text": "the tongue twister in {language}",
      "pronunciation": "syllable-by-syllable english-friendly pronunciation",
      "translation": "english translation"
    }
  ]
}

Do not include any text outside the JSON object."#;

/// Transcript-analysis prompt. Replace `{language}` and `{transcript}`.
pub const ANALYZE_SPEECH_PROMPT_TEMPLATE: &str = r#"A learner of {language} said the following (transcribed from speech):

{transcript}

Correct it if needed and rate it.

Return ONLY a JSON object with this exact structure:
{
  "original": "the transcript exactly as given",
  "correct_form": "the corrected version in {language}",
  "alternatives": ["one alternative phrasing", "another alternative phrasing"],
  "score": "a rating of the original from 1 to 10, as a string"
}

Do not include any text outside the JSON object."#;
