//! Axum route handlers for generated learning content.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::content::generator::{
    analyze_transcript, generate_dailies, generate_memory_pairs, generate_tongue_twisters,
    language_chat,
};
use crate::content::types::{
    ChatReply, FlashcardSet, MemoryPairSet, TongueTwisterSet, TranscriptAnalysis,
};
use crate::errors::AppError;
use crate::scores::{level_for_points, normalize_language};
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DailiesRequest {
    pub username: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct DailiesResponse {
    pub dailies: FlashcardSet,
}

#[derive(Debug, Deserialize)]
pub struct MemoryPairsRequest {
    pub username: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct MemoryPairsResponse {
    pub words: MemoryPairSet,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub language: String,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub data: ChatReply,
}

#[derive(Debug, Deserialize)]
pub struct TongueTwistersRequest {
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TongueTwistersResponse {
    pub data: TongueTwisterSet,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeSpeechRequest {
    pub language: String,
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeSpeechResponse {
    pub data: TranscriptAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /dailies
///
/// Daily flashcards pitched at the user's current level in the language.
pub async fn dailies(
    State(state): State<AppState>,
    Json(request): Json<DailiesRequest>,
) -> Result<Json<DailiesResponse>, AppError> {
    if request.language.trim().is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }

    let language_key = normalize_language(&request.language);
    let (_, points) = store::users::points_for(&state.db, &request.username, &language_key)
        .await?
        .ok_or(AppError::UserNotFound)?;
    let level = level_for_points(points);

    let dailies = generate_dailies(state.genai.as_ref(), &request.language, level).await;

    Ok(Json(DailiesResponse { dailies }))
}

/// POST /memorypairs
///
/// Word pairs for the memory matching game, sized to the user's level.
pub async fn memory_pairs(
    State(state): State<AppState>,
    Json(request): Json<MemoryPairsRequest>,
) -> Result<Json<MemoryPairsResponse>, AppError> {
    if request.language.trim().is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }

    let language_key = normalize_language(&request.language);
    let (_, points) = store::users::points_for(&state.db, &request.username, &language_key)
        .await?
        .ok_or(AppError::UserNotFound)?;
    let level = level_for_points(points);

    let words = generate_memory_pairs(state.genai.as_ref(), &request.language, level).await;

    Ok(Json(MemoryPairsResponse { words }))
}

/// POST /chat
///
/// Free-form question to the language teacher.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let data = language_chat(state.genai.as_ref(), &request.language, &request.query).await;

    Ok(Json(ChatResponse { data }))
}

/// POST /tonguetwisters
///
/// Tongue twisters with pronunciation guides and translations.
pub async fn tongue_twisters(
    State(state): State<AppState>,
    Json(request): Json<TongueTwistersRequest>,
) -> Result<Json<TongueTwistersResponse>, AppError> {
    if request.language.trim().is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }

    let data = generate_tongue_twisters(state.genai.as_ref(), &request.language).await;

    Ok(Json(TongueTwistersResponse { data }))
}

/// POST /analyzespeech
///
/// Corrects and rates a transcript of the learner speaking.
pub async fn analyze_speech(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeSpeechRequest>,
) -> Result<Json<AnalyzeSpeechResponse>, AppError> {
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "transcript cannot be empty".to_string(),
        ));
    }

    let data =
        analyze_transcript(state.genai.as_ref(), &request.language, &request.transcript).await;

    Ok(Json(AnalyzeSpeechResponse { data }))
}
