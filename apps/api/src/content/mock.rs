//! Canned fallback content served when the AI backend is unavailable.
//! Shapes match real generated content exactly; visible strings carry a
//! "(Mock)" tag so fallback output is recognizable in the UI.

use crate::content::types::{
    ChatReply, Flashcard, FlashcardSet, MemoryPair, MemoryPairSet, TongueTwister,
    TongueTwisterSet, TranscriptAnalysis,
};

pub fn mock_flashcards() -> FlashcardSet {
    FlashcardSet {
        cards: vec![
            Flashcard {
                new_concept: "Hola (Mock)".to_string(),
                concept_pronunciation: "oh-lah".to_string(),
                english: "Hello".to_string(),
                meaning: "A common greeting used at any time of day.".to_string(),
                example: "Hola, ¿cómo estás?".to_string(),
                example_pronunciation: "oh-lah, koh-moh ehs-tahs".to_string(),
                translation: "Hello, how are you?".to_string(),
            },
            Flashcard {
                new_concept: "Gracias (Mock)".to_string(),
                concept_pronunciation: "grah-see-ahs".to_string(),
                english: "Thank you".to_string(),
                meaning: "Expresses gratitude.".to_string(),
                example: "Muchas gracias por tu ayuda.".to_string(),
                example_pronunciation: "moo-chahs grah-see-ahs pohr too ah-yoo-dah".to_string(),
                translation: "Thank you very much for your help.".to_string(),
            },
        ],
    }
}

pub fn mock_memory_pairs() -> MemoryPairSet {
    MemoryPairSet {
        pairs: vec![
            MemoryPair(
                "Gato (Mock)".to_string(),
                "Cat".to_string(),
                "Gah-toh".to_string(),
            ),
            MemoryPair(
                "Perro (Mock)".to_string(),
                "Dog".to_string(),
                "Peh-rro".to_string(),
            ),
            MemoryPair(
                "Casa (Mock)".to_string(),
                "House".to_string(),
                "Kah-sah".to_string(),
            ),
            MemoryPair(
                "Coche (Mock)".to_string(),
                "Car".to_string(),
                "Koh-cheh".to_string(),
            ),
            MemoryPair(
                "Árbol (Mock)".to_string(),
                "Tree".to_string(),
                "Ar-bol".to_string(),
            ),
        ],
    }
}

pub fn mock_chat_reply() -> ChatReply {
    ChatReply {
        response: "I'm currently offline (Mock Mode), but normally I'd help you with that!"
            .to_string(),
        examples: "Example 1 (Mock), Example 2 (Mock)".to_string(),
        interesting_facts: "Fact 1 (Mock), Fact 2 (Mock)".to_string(),
    }
}

pub fn mock_tongue_twisters() -> TongueTwisterSet {
    TongueTwisterSet {
        tongue_twisters: vec![TongueTwister {
            text: "Tres tristes tigres tragaban trigo en un trigal (Mock)".to_string(),
            pronunciation: "Tres tris-tes ti-gres tra-ga-ban tri-go en un tri-gal".to_string(),
            translation: "Three sad tigers were eating wheat in a wheat field".to_string(),
        }],
    }
}

/// Echoes the learner's transcript back with a placeholder correction.
pub fn mock_transcript_analysis(transcript: &str) -> TranscriptAnalysis {
    TranscriptAnalysis {
        original: transcript.to_string(),
        correct_form: format!("{transcript} (Corrected Mock)"),
        alternatives: vec!["Alternative 1".to_string(), "Alternative 2".to_string()],
        score: "8".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_content_is_tagged() {
        assert!(mock_flashcards().cards[0].new_concept.contains("(Mock)"));
        assert!(mock_memory_pairs().pairs[0].0.contains("(Mock)"));
        assert!(mock_chat_reply().response.contains("Mock"));
        assert!(mock_tongue_twisters().tongue_twisters[0]
            .text
            .contains("(Mock)"));
    }

    #[test]
    fn test_mock_analysis_echoes_transcript() {
        let analysis = mock_transcript_analysis("hola como estas");
        assert_eq!(analysis.original, "hola como estas");
        assert_eq!(analysis.correct_form, "hola como estas (Corrected Mock)");
        assert_eq!(analysis.score, "8");
    }
}
