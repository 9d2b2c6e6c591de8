//! User account and score persistence.
//!
//! Usernames are keyed by their trimmed form: writes and lookups bind
//! the same key, so a padded name still reaches the account that
//! registered it.

use std::collections::BTreeMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;

const COLUMNS: &str = "id, username, password_hash, is_test, created_at";

/// Inserts a new user. The `uq_users_username` constraint enforces
/// uniqueness even under concurrent registration; a collision maps to
/// `DuplicateUser`.
pub async fn create(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<UserRow, AppError> {
    let sql =
        format!("INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING {COLUMNS}");
    sqlx::query_as::<_, UserRow>(&sql)
        .bind(username_key(username))
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateUser
            } else {
                AppError::Store(e)
            }
        })
}

pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<UserRow>, AppError> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
    sqlx::query_as::<_, UserRow>(&sql)
        .bind(username_key(username))
        .fetch_optional(pool)
        .await
        .map_err(AppError::Store)
}

/// Adds `delta` points to the user's score for `language` and returns the
/// new total. The read-modify-write is a single statement, so concurrent
/// increments cannot drop updates. Unknown usernames get `UserNotFound`.
pub async fn increment_score(
    pool: &PgPool,
    username: &str,
    language: &str,
    delta: i64,
) -> Result<i64, AppError> {
    let new_total = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO language_scores (user_id, language, score)
        SELECT id, $2, $3 FROM users WHERE username = $1
        ON CONFLICT (user_id, language)
        DO UPDATE SET score = language_scores.score + EXCLUDED.score
        RETURNING score
        "#,
    )
    .bind(username_key(username))
    .bind(language)
    .bind(delta)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Store)?;

    new_total.ok_or(AppError::UserNotFound)
}

/// Every language score for a user, keyed by language name.
pub async fn scores_for(
    pool: &PgPool,
    username: &str,
) -> Result<BTreeMap<String, i64>, AppError> {
    let user = find_by_username(pool, username)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let rows: Vec<(String, i64)> =
        sqlx::query_as("SELECT language, score FROM language_scores WHERE user_id = $1")
            .bind(user.id)
            .fetch_all(pool)
            .await
            .map_err(AppError::Store)?;

    Ok(rows.into_iter().collect())
}

/// Looks up a user and their points in one language. `None` means the
/// username does not exist; a user with no score row yet has 0 points.
pub async fn points_for(
    pool: &PgPool,
    username: &str,
    language: &str,
) -> Result<Option<(Uuid, i64)>, AppError> {
    sqlx::query_as::<_, (Uuid, i64)>(
        r#"
        SELECT u.id, COALESCE(s.score, 0)
        FROM users u
        LEFT JOIN language_scores s ON s.user_id = u.id AND s.language = $2
        WHERE u.username = $1
        "#,
    )
    .bind(username_key(username))
    .bind(language)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Store)
}

/// Top scorers for one language, best first. Ties break by username so the
/// ordering is stable.
pub async fn leaderboard(
    pool: &PgPool,
    language: &str,
    limit: i64,
) -> Result<Vec<(String, i64)>, AppError> {
    sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT u.username, s.score
        FROM language_scores s
        JOIN users u ON u.id = s.user_id
        WHERE s.language = $1
        ORDER BY s.score DESC, u.username
        LIMIT $2
        "#,
    )
    .bind(language)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(AppError::Store)
}

/// Postgres unique violation (23505) on one of our `uq_`-prefixed
/// constraints.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db) = err {
        return db.code().as_deref() == Some("23505")
            && db.constraint().map_or(false, |c| c.starts_with("uq_"));
    }
    false
}

/// Canonical storage key for a username. Every write and lookup binds
/// this form, never the raw request string.
fn username_key(username: &str) -> &str {
    username.trim()
}
