use std::sync::Arc;

use crate::config::Config;
use crate::stems::generator::StemSource;
use crate::stems::validator::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production.
    pub stem_source: Arc<dyn StemSource>,
    pub embedder: Arc<dyn Embedder>,
    pub config: Config,
}
