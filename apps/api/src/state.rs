use std::sync::Arc;

use crate::embedding::Embedder;
use crate::kpi::scorer::Scorer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators are trait objects so tests and alternate backends can
/// swap them without touching handler code.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn Scorer>,
    pub embedder: Arc<dyn Embedder>,
}
