pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::content;
use crate::scores;
use crate::state::AppState;
use crate::story;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login))
        .route("/logout", post(auth::handlers::logout))
        // Scores
        .route("/updatescore", post(scores::handlers::update_score))
        .route("/getscores", post(scores::handlers::get_scores))
        .route("/leaderboard", post(scores::handlers::leaderboard))
        // Generated content
        .route("/dailies", post(content::handlers::dailies))
        .route("/memorypairs", post(content::handlers::memory_pairs))
        .route("/chat", post(content::handlers::chat))
        .route("/tonguetwisters", post(content::handlers::tongue_twisters))
        .route("/analyzespeech", post(content::handlers::analyze_speech))
        // Guided stories
        .route("/storystart", post(story::handlers::story_start))
        .route("/storynarrate", post(story::handlers::story_narrate))
        .with_state(state)
}
