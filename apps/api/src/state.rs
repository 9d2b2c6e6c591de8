use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::genai::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable text backend. Production wires in `GeminiClient`; tests
    /// substitute canned or failing implementations.
    pub genai: Arc<dyn TextGenerator>,
    pub config: Config,
}
