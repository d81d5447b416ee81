use crate::api::analysis::analysis::{history, run_analysis};
use crate::api::auth::auth::{login, logout, register};
use crate::api::documents::documents::upload_document;
use crate::api::scenarios::scenarios::list_scenarios;
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Body limit sits well above the upload cap so oversized files reach
    // the handler and get a 400 with a real message instead of a bare 413.
    let body_limit = state.max_upload_bytes * 2;

    Router::new()
        // Account endpoints
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        // Analysis workflow endpoints
        .route("/api/v1/scenarios", get(list_scenarios))
        .route("/api/v1/documents", post(upload_document))
        .route("/api/v1/analysis", post(run_analysis))
        .route("/api/v1/analysis/history", get(history))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        // CORS middleware (single-page client may be served elsewhere)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
