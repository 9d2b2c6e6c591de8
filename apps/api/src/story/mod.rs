// Guided story mode: story generation, sessions, narration flow.

pub mod generator;
pub mod handlers;
pub mod prompts;
