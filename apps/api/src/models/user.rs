#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `users`. Not `Serialize`: the password hash must never reach a
/// response body.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub is_test: bool,
    pub created_at: DateTime<Utc>,
}
