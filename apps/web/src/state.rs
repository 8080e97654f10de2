use std::sync::Arc;

use crate::config::Config;
use crate::match_client::CandidateMatcher;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Matching backend. `MatchClient` in production, stubs in tests.
    pub matcher: Arc<dyn CandidateMatcher>,
    pub sessions: SessionStore,
}
