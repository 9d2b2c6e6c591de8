//! Story session persistence.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::story::StorySessionRow;
use crate::story::generator::Story;

const COLUMNS: &str = "id, user_id, language, title, title_english, parts, \
     current_part, total_parts, status, created_at";

/// Inserts a fresh session starting at part 1.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    language: &str,
    story: &Story,
) -> Result<StorySessionRow, AppError> {
    let sql = format!(
        "INSERT INTO story_sessions (user_id, language, title, title_english, parts, total_parts) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, StorySessionRow>(&sql)
        .bind(user_id)
        .bind(language)
        .bind(&story.title)
        .bind(&story.title_english)
        .bind(Json(&story.parts))
        .bind(story.parts.len() as i32)
        .fetch_one(pool)
        .await
        .map_err(AppError::Store)
}

/// The user's most recent in-progress session, if any.
pub async fn find_active(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<StorySessionRow>, AppError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM story_sessions \
         WHERE user_id = $1 AND status = 'in_progress' \
         ORDER BY created_at DESC \
         LIMIT 1"
    );
    sqlx::query_as::<_, StorySessionRow>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Store)
}

/// Moves a session forward by one part after a narration. The update is
/// keyed on the part the caller read, so duplicate submissions for one
/// part advance the session exactly once. Narrating the final part flips
/// the session to `completed` and leaves `current_part` on that part.
/// Returns `None` if the session is not in progress or has already moved
/// past `expected_part`.
pub async fn advance(
    pool: &PgPool,
    session_id: Uuid,
    expected_part: i32,
) -> Result<Option<StorySessionRow>, AppError> {
    // The CASE sees pre-update values, so the completion check reads the
    // part that was just narrated.
    let sql = format!(
        "UPDATE story_sessions \
         SET current_part = LEAST(current_part + 1, total_parts), \
             status = CASE WHEN current_part >= total_parts THEN 'completed' ELSE status END \
         WHERE id = $1 AND status = 'in_progress' AND current_part = $2 \
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, StorySessionRow>(&sql)
        .bind(session_id)
        .bind(expected_part)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Store)
}
