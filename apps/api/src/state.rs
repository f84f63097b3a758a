use std::sync::Arc;

use crate::config::Config;
use crate::jobs::client::JobSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job search backend. Default: JSearchClient.
    pub job_search: Arc<dyn JobSearch>,
}
