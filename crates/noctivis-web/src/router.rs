//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    assistant,
    page::index,
    projects::api_projects,
    publications::api_publications,
    sections::{api_section_detail, api_sections},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // The page
        .route("/", get(index))

        // API endpoints
        .route("/api/assistant", post(assistant::ask))
        .route("/api/publications", get(api_publications))
        .route("/api/projects", get(api_projects))
        .route("/api/sections", get(api_sections))
        .route("/api/sections/{id}", get(api_section_detail))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
