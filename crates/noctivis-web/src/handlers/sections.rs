//! Section metadata endpoints — the section-existence contract over HTTP.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::nav::{Section, HEADER_HEIGHT};

/// GET /api/sections — ordered section list plus the fixed header offset.
pub async fn api_sections() -> Json<serde_json::Value> {
    let sections: Vec<_> = Section::ALL
        .iter()
        .map(|s| json!({ "id": s.id(), "label": s.label() }))
        .collect();

    Json(json!({
        "header_offset": HEADER_HEIGHT,
        "sections": sections,
    }))
}

/// GET /api/sections/{id} — 404 for ids no section claims.
pub async fn api_section_detail(Path(id): Path<String>) -> impl IntoResponse {
    match Section::from_id(&id) {
        Some(s) => Json(json!({
            "id": s.id(),
            "label": s.label(),
            "header_offset": HEADER_HEIGHT,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown section: {}", id) })),
        )
            .into_response(),
    }
}
