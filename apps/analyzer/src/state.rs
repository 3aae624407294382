use std::sync::Arc;

use crate::analysis::scorer::MatchScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: TfIdfScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
