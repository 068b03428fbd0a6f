use crate::analysis::analyzer::JobAnalyzer;
use crate::config::Config;
use crate::jobs::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: JobStore,
    pub analyzer: JobAnalyzer,
    pub config: Config,
}
