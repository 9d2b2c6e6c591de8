//! Content generation pipeline: fill a prompt template, call the backend,
//! decode the JSON it returns. Backend failures never surface to callers;
//! every generator falls back to canned mock content instead.

use crate::content::mock;
use crate::content::prompts::{
    ANALYZE_SPEECH_PROMPT_TEMPLATE, CHAT_PROMPT_TEMPLATE, DAILIES_PROMPT_TEMPLATE,
    MEMORY_PAIRS_PROMPT_TEMPLATE, TONGUE_TWISTERS_PROMPT_TEMPLATE,
};
use crate::content::types::{
    ChatReply, FlashcardSet, MemoryPairSet, TongueTwisterSet, TranscriptAnalysis,
};
use crate::genai::{generate_json, log_fallback, TextGenerator};
use crate::scores::Level;

/// Generates the daily flashcard set for a language at the given level.
pub async fn generate_dailies(
    backend: &dyn TextGenerator,
    language: &str,
    level: Level,
) -> FlashcardSet {
    let prompt = DAILIES_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{level}", level.as_str());

    match generate_json::<FlashcardSet>(backend, &prompt).await {
        Ok(set) => set,
        Err(e) => {
            log_fallback("dailies", &e);
            mock::mock_flashcards()
        }
    }
}

/// Generates word pairs for the memory matching game.
pub async fn generate_memory_pairs(
    backend: &dyn TextGenerator,
    language: &str,
    level: Level,
) -> MemoryPairSet {
    let prompt = MEMORY_PAIRS_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{level}", level.as_str());

    match generate_json::<MemoryPairSet>(backend, &prompt).await {
        Ok(set) => set,
        Err(e) => {
            log_fallback("memory_pairs", &e);
            mock::mock_memory_pairs()
        }
    }
}

/// Answers a free-form learner question about the language.
pub async fn language_chat(backend: &dyn TextGenerator, language: &str, query: &str) -> ChatReply {
    let prompt = CHAT_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{query}", query);

    match generate_json::<ChatReply>(backend, &prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            log_fallback("chat", &e);
            mock::mock_chat_reply()
        }
    }
}

/// Generates tongue twisters with pronunciation guides.
pub async fn generate_tongue_twisters(
    backend: &dyn TextGenerator,
    language: &str,
) -> TongueTwisterSet {
    let prompt = TONGUE_TWISTERS_PROMPT_TEMPLATE.replace("{language}", language);

    match generate_json::<TongueTwisterSet>(backend, &prompt).await {
        Ok(set) => set,
        Err(e) => {
            log_fallback("tongue_twisters", &e);
            mock::mock_tongue_twisters()
        }
    }
}

/// Corrects and rates a spoken transcript.
pub async fn analyze_transcript(
    backend: &dyn TextGenerator,
    language: &str,
    transcript: &str,
) -> TranscriptAnalysis {
    let prompt = ANALYZE_SPEECH_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{transcript}", transcript);

    match generate_json::<TranscriptAnalysis>(backend, &prompt).await {
        Ok(analysis) => analysis,
        Err(e) => {
            log_fallback("analyze_speech", &e);
            mock::mock_transcript_analysis(transcript)
        }
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

    #[tokio::test]
    async fn test_dailies_fall_back_to_mock_when_backend_is_down() {
        let set = generate_dailies(&Failing, "Spanish", Level::Beginner).await;
        assert!(!set.cards.is_empty());
        assert!(set.cards[0].new_concept.contains("(Mock)"));
    }

    #[tokio::test]
    async fn test_dailies_use_backend_output_when_it_parses() {
        let backend = Canned(
            r#"```json
{
  "cards": [
    {
      "new_concept": "Bonjour",
      "concept_pronunciation": "bon-zhoor",
      "english": "Hello",
      "meaning": "A greeting.",
      "example": "Bonjour, Marie.",
      "example_pronunciation": "bon-zhoor ma-ree",
      "translation": "Hello, Marie."
    }
  ]
}
```"#,
        );
        let set = generate_dailies(&backend, "French", Level::Beginner).await;
        assert_eq!(set.cards.len(), 1);
        assert_eq!(set.cards[0].new_concept, "Bonjour");
    }

    #[tokio::test]
    async fn test_unparseable_output_also_falls_back() {
        let backend = Canned("Sorry, I can't produce JSON today.");
        let set = generate_memory_pairs(&backend, "Spanish", Level::Advanced).await;
        assert!(set.pairs[0].0.contains("(Mock)"));
    }

    #[tokio::test]
    async fn test_memory_pairs_parse_nested_arrays() {
        let backend = Canned(r#"{"pairs":[["Gato","Cat","Gah-toh"]]}"#);
        let set = generate_memory_pairs(&backend, "Spanish", Level::Beginner).await;
        assert_eq!(set.pairs.len(), 1);
        assert_eq!(set.pairs[0].1, "Cat");
    }

    #[tokio::test]
    async fn test_chat_falls_back_to_mock() {
        let reply = language_chat(&Failing, "Spanish", "When do I use ser?").await;
        assert!(reply.response.contains("Mock"));
    }

    #[tokio::test]
    async fn test_chat_uses_backend_reply() {
        let backend = Canned(
            r#"{"response":"Use ser for permanent traits.","examples":"Soy alto. / Es medico.","interesting_facts":"Ser comes from latin."}"#,
        );
        let reply = language_chat(&backend, "Spanish", "When do I use ser?").await;
        assert_eq!(reply.response, "Use ser for permanent traits.");
    }

    #[tokio::test]
    async fn test_tongue_twisters_fall_back_to_mock() {
        let set = generate_tongue_twisters(&Failing, "Spanish").await;
        assert!(set.tongue_twisters[0].text.contains("(Mock)"));
    }

    #[tokio::test]
    async fn test_analysis_fallback_echoes_transcript() {
        let analysis = analyze_transcript(&Failing, "Spanish", "yo es contento").await;
        assert_eq!(analysis.original, "yo es contento");
        assert!(analysis.correct_form.starts_with("yo es contento"));
    }

    #[tokio::test]
    async fn test_analysis_uses_backend_output() {
        let backend = Canned(
            r#"{"original":"yo es contento","correct_form":"estoy contento","alternatives":["me siento contento"],"score":"5"}"#,
        );
        let analysis = analyze_transcript(&backend, "Spanish", "yo es contento").await;
        assert_eq!(analysis.correct_form, "estoy contento");
        assert_eq!(analysis.score, "5");
    }
}
