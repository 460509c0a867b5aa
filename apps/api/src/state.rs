use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;
use crate::matching::scoring::MatchScorer;
use crate::scheduling::repository::SlotRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text-completion collaborator used by resume extraction.
    pub llm: Arc<dyn TextGenerator>,
    /// Pluggable match scorer. Default: HeuristicMatchScorer.
    pub matcher: Arc<dyn MatchScorer>,
    /// Interview slot store. Postgres in production, in-memory in tests —
    /// scheduling never touches process-wide state.
    pub slots: Arc<dyn SlotRepository>,
}
