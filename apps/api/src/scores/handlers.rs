//! Axum route handlers for score tracking and the leaderboard.

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::scores::normalize_language;
use crate::state::AppState;
use crate::store;

/// Number of entries the leaderboard returns.
const LEADERBOARD_SIZE: i64 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    pub username: String,
    pub language: String,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct GetScoresRequest {
    pub username: String,
    // Accepted for wire compatibility; the read returns every language.
    #[allow(dead_code)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetScoresResponse {
    pub languages: BTreeMap<String, i64>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardRequest {
    pub language: String,
    // Accepted for wire compatibility; the board is not personalized.
    #[allow(dead_code)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub points: i64,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /updatescore
///
/// Adds points to one user's score in one language. Succeeds with an
/// empty body; an unknown username gets 404.
pub async fn update_score(
    State(state): State<AppState>,
    Json(request): Json<UpdateScoreRequest>,
) -> Result<StatusCode, AppError> {
    let language = normalize_language(&request.language);
    if language.is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }

    let new_total =
        store::users::increment_score(&state.db, &request.username, &language, request.score)
            .await?;

    info!(username = %request.username, language = %language, new_total, "score updated");

    Ok(StatusCode::OK)
}

/// POST /getscores
///
/// Every language score for a user, as a language-to-points map.
pub async fn get_scores(
    State(state): State<AppState>,
    Json(request): Json<GetScoresRequest>,
) -> Result<Json<GetScoresResponse>, AppError> {
    let languages = store::users::scores_for(&state.db, &request.username).await?;

    Ok(Json(GetScoresResponse { languages }))
}

/// POST /leaderboard
///
/// Top scorers for a language. A store failure degrades to an empty board
/// instead of an error.
pub async fn leaderboard(
    State(state): State<AppState>,
    Json(request): Json<LeaderboardRequest>,
) -> Json<LeaderboardResponse> {
    let language = normalize_language(&request.language);

    let rows = match store::users::leaderboard(&state.db, &language, LEADERBOARD_SIZE).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(language = %language, error = %e, "leaderboard query failed, returning empty board");
            Vec::new()
        }
    };

    let leaderboard = rows
        .into_iter()
        .enumerate()
        .map(|(i, (username, points))| LeaderboardEntry {
            rank: (i + 1) as u32,
            username,
            points,
        })
        .collect();

    Json(LeaderboardResponse { leaderboard })
}
