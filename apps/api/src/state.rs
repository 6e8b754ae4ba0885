use std::sync::Arc;

use crate::config::Config;
use crate::jobs::client::JobSearch;
use crate::llm_client::ChatGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Chat-completion provider. Default: `LlmClient` (OpenRouter).
    pub llm: Arc<dyn ChatGateway>,
    /// Job-search provider. Default: `SerpApiClient`.
    pub jobs: Arc<dyn JobSearch>,
}
