use std::sync::Arc;

use crate::config::Config;
use crate::extraction::FieldExtractor;
use crate::rewrite::Rewriter;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory per-session résumé values. Nothing is persisted.
    pub sessions: SessionStore,
    /// Extraction collaborator. Production: LLM-backed; tests: canned records.
    pub extractor: Arc<dyn FieldExtractor>,
    /// Rewrite collaborator, same seam.
    pub rewriter: Arc<dyn Rewriter>,
    pub config: Config,
}
