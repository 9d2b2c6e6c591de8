//! Axum route handlers for guided story sessions.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::content::generator::analyze_transcript;
use crate::content::types::TranscriptAnalysis;
use crate::errors::AppError;
use crate::scores::{level_for_points, normalize_language};
use crate::state::AppState;
use crate::store;
use crate::story::generator::{generate_story, StoryPart};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StoryStartRequest {
    pub username: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct StoryStartResponse {
    pub story_id: Uuid,
    pub current_part: StoryPart,
    pub total_parts: i32,
}

#[derive(Debug, Deserialize)]
pub struct StoryNarrateRequest {
    pub username: String,
    pub transcription: String,
}

#[derive(Debug, Serialize)]
pub struct StoryNarrateResponse {
    pub status: String,
    pub next_part: Option<StoryPart>,
    pub current_feedback: TranscriptAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /storystart
///
/// Generates a story at the user's level and opens a session on part 1.
/// Starting a new session supersedes any story still in progress.
pub async fn story_start(
    State(state): State<AppState>,
    Json(request): Json<StoryStartRequest>,
) -> Result<Json<StoryStartResponse>, AppError> {
    if request.language.trim().is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }

    let language_key = normalize_language(&request.language);
    let (user_id, points) = store::users::points_for(&state.db, &request.username, &language_key)
        .await?
        .ok_or(AppError::UserNotFound)?;
    let level = level_for_points(points);

    let story = generate_story(state.genai.as_ref(), &request.language, level).await;
    let session = store::stories::create(&state.db, user_id, &request.language, &story).await?;

    let current_part = session
        .parts
        .first()
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("story session has no parts")))?;

    info!(username = %request.username, story_id = %session.id, "story session started");

    Ok(Json(StoryStartResponse {
        story_id: session.id,
        current_part,
        total_parts: session.total_parts,
    }))
}

/// POST /storynarrate
///
/// Records the learner narrating the current part: the transcription is
/// corrected and rated, then the session moves to the next part. After
/// the final part the session completes and `next_part` is null.
/// Duplicate submissions for one part advance the story once; later
/// ones get 409.
pub async fn story_narrate(
    State(state): State<AppState>,
    Json(request): Json<StoryNarrateRequest>,
) -> Result<Json<StoryNarrateResponse>, AppError> {
    if request.transcription.trim().is_empty() {
        return Err(AppError::Validation(
            "transcription cannot be empty".to_string(),
        ));
    }

    let user = store::users::find_by_username(&state.db, &request.username)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let session = store::stories::find_active(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("no active story session".to_string()))?;

    let current_feedback =
        analyze_transcript(state.genai.as_ref(), &session.language, &request.transcription).await;

    let updated = store::stories::advance(&state.db, session.id, session.current_part)
        .await?
        .ok_or_else(|| AppError::Conflict("story part already narrated".to_string()))?;

    let next_part = if updated.status == "completed" {
        None
    } else {
        updated
            .parts
            .get((updated.current_part - 1) as usize)
            .cloned()
    };

    if updated.status == "completed" {
        info!(username = %request.username, story_id = %updated.id, "story session completed");
    }

    Ok(Json(StoryNarrateResponse {
        status: updated.status,
        next_part,
        current_feedback,
    }))
}
