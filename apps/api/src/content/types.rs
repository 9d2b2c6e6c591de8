//! Wire shapes for generated learning content. The AI backend and the mock
//! fallbacks both produce these, so callers never see which one answered.

use serde::{Deserialize, Serialize};

/// One daily flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub new_concept: String,
    pub concept_pronunciation: String,
    pub english: String,
    pub meaning: String,
    pub example: String,
    pub example_pronunciation: String,
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub cards: Vec<Flashcard>,
}

/// One memory-game pair, serialized as `[term, translation, pronunciation]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPair(pub String, pub String, pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPairSet {
    pub pairs: Vec<MemoryPair>,
}

/// Answer from the teaching chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub examples: String,
    pub interesting_facts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TongueTwister {
    pub text: String,
    pub pronunciation: String,
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TongueTwisterSet {
    pub tongue_twisters: Vec<TongueTwister>,
}

/// Feedback on a spoken transcript. `score` is a 1-10 rating kept as a
/// string because that is how the model returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptAnalysis {
    pub original: String,
    pub correct_form: String,
    pub alternatives: Vec<String>,
    pub score: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pair_serializes_as_array() {
        let pair = MemoryPair(
            "Gato".to_string(),
            "Cat".to_string(),
            "Gah-toh".to_string(),
        );
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"["Gato","Cat","Gah-toh"]"#);
    }

    #[test]
    fn test_flashcard_set_decodes_model_output() {
        let json = r#"{"cards":[{"new_concept":"Hola","concept_pronunciation":"oh-lah","english":"Hello","meaning":"A greeting.","example":"Hola, Ana.","example_pronunciation":"oh-lah ah-nah","translation":"Hello, Ana."}]}"#;
        let set: FlashcardSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.cards.len(), 1);
        assert_eq!(set.cards[0].new_concept, "Hola");
    }

    #[test]
    fn test_memory_pair_set_decodes_nested_arrays() {
        let json = r#"{"pairs":[["Gato","Cat","Gah-toh"],["Perro","Dog","Peh-rro"]]}"#;
        let set: MemoryPairSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.pairs.len(), 2);
        assert_eq!(set.pairs[1].0, "Perro");
        assert_eq!(set.pairs[1].1, "Dog");
    }

    #[test]
    fn test_transcript_analysis_keeps_score_as_string() {
        let json = r#"{"original":"yo es","correct_form":"yo soy","alternatives":["soy yo"],"score":"6"}"#;
        let analysis: TranscriptAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.score, "6");
    }
}
