#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::story::generator::StoryPart;

/// Row in `story_sessions`. `current_part` is 1-based and points at the
/// part the learner narrates next; `status` is `in_progress` until the last
/// part has been narrated, then `completed`.
#[derive(Debug, Clone, FromRow)]
pub struct StorySessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub language: String,
    pub title: String,
    pub title_english: String,
    pub parts: Json<Vec<StoryPart>>,
    pub current_part: i32,
    pub total_parts: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
