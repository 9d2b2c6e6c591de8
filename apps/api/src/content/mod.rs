// AI-generated learning content: daily flashcards, memory pairs, teaching
// chat, tongue twisters, transcript analysis.
// All model calls go through genai — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod mock;
pub mod prompts;
pub mod types;
