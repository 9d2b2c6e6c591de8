//! Axum route handlers for account registration, login and logout.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_token;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub status: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub status: String,
    pub message: String,
    pub clear_data: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /register
///
/// Creates an account and signs its first access token. Registering a
/// username that already exists fails with 409.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let username = request.username.trim();
    if username.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "username and password cannot be empty".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?;

    let user = store::users::create(&state.db, username, &password_hash).await?;

    let access_token = issue_token(&user.username, &state.config)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))?;

    info!(username = %user.username, "registered new user");

    Ok(Json(AuthResponse {
        status: "success".to_string(),
        access_token,
    }))
}

/// POST /login
///
/// Verifies credentials and signs a fresh access token. An unknown username
/// and a wrong password produce the same error, so the endpoint leaks
/// nothing about which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = store::users::find_by_username(&state.db, &request.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let access_token = issue_token(&user.username, &state.config)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))?;

    info!(username = %user.username, "login succeeded");

    Ok(Json(AuthResponse {
        status: "success".to_string(),
        access_token,
    }))
}

/// POST /logout
///
/// Tokens are not tracked server-side, so logout only tells the client to
/// discard its token and clear local state.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        status: "success".to_string(),
        message: "Logout successful".to_string(),
        clear_data: true,
    })
}
