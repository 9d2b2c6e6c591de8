//! Story generation: a short multi-part story the learner narrates back
//! one part at a time.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::genai::{generate_json, log_fallback, TextGenerator};
use crate::scores::Level;
use crate::story::prompts::STORY_PROMPT_TEMPLATE;

/// Number of parts every generated story has.
pub const STORY_PARTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryPart {
    pub part_number: u32,
    /// The story text in the learning language.
    pub content: String,
    pub translation: String,
    /// Short english scene description, used by clients for illustration.
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub title_english: String,
    pub parts: Vec<StoryPart>,
}

/// The model wraps its story in a `story` envelope.
#[derive(Debug, Deserialize)]
struct StoryEnvelope {
    story: Story,
}

/// Generates a story pitched at the learner's level. Falls back to the
/// canned story when the backend fails or returns a story with no parts.
pub async fn generate_story(backend: &dyn TextGenerator, language: &str, level: Level) -> Story {
    let prompt = STORY_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{level}", level.as_str())
        .replace("{parts}", &STORY_PARTS.to_string());

    match generate_json::<StoryEnvelope>(backend, &prompt).await {
        Ok(envelope) if !envelope.story.parts.is_empty() => renumber(envelope.story),
        Ok(_) => {
            warn!(content_kind = "story", "generated story had no parts, serving mock story");
            mock_story()
        }
        Err(e) => {
            log_fallback("story", &e);
            mock_story()
        }
    }
}

/// Model part numbering is untrusted; renumber sequentially from 1.
fn renumber(mut story: Story) -> Story {
    for (i, part) in story.parts.iter_mut().enumerate() {
        part.part_number = (i + 1) as u32;
    }
    story
}

/// Canned five-part story served when generation fails.
pub fn mock_story() -> Story {
    let parts = [
        (
            "María sale de su casa por la mañana.",
            "María leaves her house in the morning.",
            "A woman stepping out of a small house at sunrise.",
        ),
        (
            "Camina por el parque y ve un perro pequeño.",
            "She walks through the park and sees a small dog.",
            "A park path with a small dog sitting on it.",
        ),
        (
            "El perro la sigue hasta el mercado.",
            "The dog follows her to the market.",
            "A busy open-air market with fruit stalls.",
        ),
        (
            "María compra pan y comparte un trozo con el perro.",
            "María buys bread and shares a piece with the dog.",
            "A woman handing bread to a happy dog.",
        ),
        (
            "Vuelven juntos a casa antes de la lluvia.",
            "They walk home together before the rain.",
            "A woman and a dog walking home under gathering clouds.",
        ),
    ];

    Story {
        title: "El Viaje (Mock)".to_string(),
        title_english: "The Journey".to_string(),
        parts: parts
            .into_iter()
            .enumerate()
            .map(|(i, (content, translation, description))| StoryPart {
                part_number: (i + 1) as u32,
                content: content.to_string(),
                translation: translation.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::GenAiError;
    use async_trait::async_trait;

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Err(GenAiError::Unreachable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_mock_story_has_sequential_parts() {
        let story = mock_story();
        assert_eq!(story.parts.len(), STORY_PARTS);
        for (i, part) in story.parts.iter().enumerate() {
            assert_eq!(part.part_number, (i + 1) as u32);
        }
        assert!(story.title.contains("(Mock)"));
    }

    #[tokio::test]
    async fn test_generation_falls_back_to_mock() {
        let story = generate_story(&Failing, "Spanish", Level::Beginner).await;
        assert!(story.title.contains("(Mock)"));
        assert_eq!(story.parts.len(), STORY_PARTS);
    }

    #[tokio::test]
    async fn test_generated_parts_are_renumbered() {
        let backend = Canned(
            r#"{"story":{"title":"El Gato","title_english":"The Cat","parts":[
                {"part_number":0,"content":"Uno.","translation":"One.","description":"A cat."},
                {"part_number":0,"content":"Dos.","translation":"Two.","description":"A cat again."}
            ]}}"#,
        );
        let story = generate_story(&backend, "Spanish", Level::Beginner).await;
        assert_eq!(story.title, "El Gato");
        assert_eq!(story.parts[0].part_number, 1);
        assert_eq!(story.parts[1].part_number, 2);
    }

    #[tokio::test]
    async fn test_story_with_no_parts_falls_back() {
        let backend =
            Canned(r#"{"story":{"title":"Vacío","title_english":"Empty","parts":[]}}"#);
        let story = generate_story(&backend, "Spanish", Level::Beginner).await;
        assert!(story.title.contains("(Mock)"));
    }
}
