use std::sync::Arc;

use crate::{embed::Embedder, store::EventStore};

/// Shared application state.
///
/// The store and embedder are injected by the process entry point (or the
/// test harness); handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
    pub embedder: Arc<dyn Embedder>,
    /// Max items returned by the popularity fallback
    pub popular_limit: usize,
    /// Max items returned by personalized ranking
    pub candidate_limit: usize,
}

impl AppState {
    /// Creates application state with default result limits
    pub fn new(store: Arc<dyn EventStore>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            store,
            embedder,
            popular_limit: 10,
            candidate_limit: 20,
        }
    }

    pub fn with_limits(mut self, popular_limit: usize, candidate_limit: usize) -> Self {
        self.popular_limit = popular_limit;
        self.candidate_limit = candidate_limit;
        self
    }
}
