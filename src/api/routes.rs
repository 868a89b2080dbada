//! API Routes
//!
//! Configures the Axum router with the protocol front-end endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, call_tool_handler, health_handler, list_tools_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /tools` - List callable operations and their input schemas
/// - `POST /tools/:name` - Invoke an operation with a JSON argument object
/// - `GET /cache/stats` - Cache entry count and estimated memory usage
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/tools", get(list_tools_handler))
        .route("/tools/:name", post(call_tool_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
