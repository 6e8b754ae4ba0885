pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::ALLOWED_ORIGINS;
use crate::interview::handlers as interview;
use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/parse-resume", post(resume::handle_parse_resume))
        .route(
            "/api/generate-questions",
            post(interview::handle_generate_questions),
        )
        .route("/api/evaluate", post(interview::handle_evaluate))
        .route("/jobs", get(jobs::handle_jobs))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

/// Browser access is limited to the known frontends, with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(ALLOWED_ORIGINS.map(HeaderValue::from_static)))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
