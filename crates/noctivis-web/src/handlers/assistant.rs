//! Research-assistant endpoint and widget markup.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::assistant::AssistantSession;
use crate::nav::Section;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
}

/// POST /api/assistant — one visitor question, one generated answer.
/// Generation failures are absorbed into the session's fixed error text, so
/// this always answers 200 once a request has been issued.
pub async fn ask(
    State(state): State<SharedState>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    let Some(generator) = state.generator.clone() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "research assistant is not configured" })),
        )
            .into_response();
    };

    let mut session = AssistantSession::new();
    if !session.submit_query(generator.as_ref(), &req.question).await {
        // Blank questions are a no-op, not an error.
        return StatusCode::NO_CONTENT.into_response();
    }

    Json(AskResponse {
        answer: session.response().to_string(),
        model: generator.model_id().to_string(),
    })
    .into_response()
}

/// The widget markup. Without a configured credential the form is replaced
/// by a notice; the rest of the page is unaffected either way.
pub fn render_widget(configured: bool) -> String {
    let body = if configured {
        r#"<div class="assistant-form">
            <input type="text" id="assistant-input" class="assistant-input"
                placeholder="e.g., What is his approach to low-light vision?">
            <button id="assistant-submit" class="btn btn-primary">Analyze</button>
        </div>
        <div id="assistant-response" class="assistant-response" hidden>
            <div class="assistant-response-label">AI Insights:</div>
            <div id="assistant-response-text"></div>
        </div>"#
            .to_string()
    } else {
        r#"<div class="assistant-notice">
            The research assistant is currently unavailable: no API credential is configured.
        </div>"#
            .to_string()
    };

    format!(
        r#"<section id="{}" class="section section-alt">
    <div class="section-inner narrow">
        <div class="assistant-card">
            <h3 class="assistant-title">AI Research Assistant</h3>
            <p class="assistant-intro">
                Curious about Dr. Nguyen's specific contributions? Ask our AI assistant about
                his papers, methodology, or vision.
            </p>
            {}
        </div>
    </div>
</section>"#,
        Section::AiAssistant.id(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_widget_renders_form() {
        let html = render_widget(true);
        assert!(html.contains("assistant-input"));
        assert!(html.contains(">Analyze<"));
        assert!(!html.contains("assistant-notice"));
    }

    #[test]
    fn test_unconfigured_widget_renders_notice() {
        let html = render_widget(false);
        assert!(html.contains("assistant-notice"));
        assert!(!html.contains("assistant-input"));
    }
}
