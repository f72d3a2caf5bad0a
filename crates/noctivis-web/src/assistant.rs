//! Research-assistant session core.
//!
//! Owns the per-widget state record and the full request lifecycle: prompt
//! construction from the publication catalog, exactly one outbound generate
//! call, and the mapping of every outcome to display text. All failures are
//! absorbed here; nothing propagates to the rest of the page.

use noctivis_content::{PROFILE, PUBLICATIONS};
use noctivis_llm::TextGenerator;

/// Shown when the service replies successfully but with no text.
pub const FALLBACK_MESSAGE: &str = "I couldn't generate a summary at this moment.";

/// Shown for any transport or endpoint failure. The cause is logged, never
/// surfaced to the visitor.
pub const ERROR_MESSAGE: &str =
    "An error occurred while connecting to the research intelligence system.";

/// Build the full instruction text for one visitor question: persona line,
/// one bullet per publication in catalog order, the verbatim question, and
/// the closing tone instruction.
pub fn build_prompt(question: &str) -> String {
    let pub_summary = PUBLICATIONS
        .iter()
        .map(|p| format!("- {} ({}, {})", p.title, p.venue, p.year))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an academic assistant for {}, a {} specializing in {} and {}.\n\
         Based on his publications:\n\
         {}\n\n\
         Answer this visitor's question about his research: \"{}\"\n\
         Keep it professional, academic, and concise.",
        PROFILE.short_name,
        PROFILE.title,
        PROFILE.specializations[0],
        PROFILE.specializations[1],
        pub_summary,
        question,
    )
}

/// Per-widget session state: the last response and the busy flag.
/// Single owner, single writer; at most one request in flight.
#[derive(Debug, Default)]
pub struct AssistantSession {
    response: String,
    in_flight: bool,
}

impl AssistantSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied response text; empty until a query resolves.
    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit one visitor question.
    ///
    /// Returns false when the submission was ignored — a blank question, or
    /// a request already in flight — in which case the session state is
    /// untouched and no request is issued. Otherwise issues exactly one
    /// generate call and leaves `in_flight` false on every path.
    pub async fn submit_query(&mut self, generator: &dyn TextGenerator, question: &str) -> bool {
        if question.trim().is_empty() || self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.response.clear();

        let prompt = build_prompt(question);
        self.response = match generator.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => FALLBACK_MESSAGE.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "research assistant request failed");
                ERROR_MESSAGE.to_string()
            }
        };
        self.in_flight = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use noctivis_llm::LlmError;
    use std::sync::Mutex;

    /// Scripted generator that records every prompt it receives.
    struct FakeGenerator {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(text: &str) -> Self {
            Self { reply: Ok(text.to_string()), prompts: Mutex::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { reply: Err(()), prompts: Mutex::new(Vec::new()) }
        }

        fn request_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(LlmError::ApiError {
                    status: 503,
                    message: "upstream unavailable".to_string(),
                }),
            }
        }

        fn model_id(&self) -> &str {
            "fake-model"
        }
    }

    #[tokio::test]
    async fn test_one_request_with_catalog_in_order() {
        let generator = FakeGenerator::replying("answer");
        let mut session = AssistantSession::new();

        assert!(session.submit_query(&generator, "What is his approach?").await);
        assert_eq!(generator.request_count(), 1);

        let prompts = generator.prompts.lock().unwrap();
        let prompt = &prompts[0];
        let mut last_pos = 0;
        for p in PUBLICATIONS {
            let bullet = format!("- {} ({}, {})", p.title, p.venue, p.year);
            let pos = prompt.find(&bullet).unwrap_or_else(|| {
                panic!("prompt is missing publication bullet: {bullet}")
            });
            assert!(pos >= last_pos, "publication bullets out of catalog order");
            last_pos = pos;
        }
        assert!(prompt.contains("\"What is his approach?\""));
        assert!(prompt.contains("professional, academic, and concise"));
    }

    #[tokio::test]
    async fn test_blank_question_is_a_no_op() {
        let generator = FakeGenerator::replying("never seen");
        let mut session = AssistantSession { response: "prior".to_string(), in_flight: false };

        assert!(!session.submit_query(&generator, "   ").await);
        assert!(!session.submit_query(&generator, "").await);
        assert_eq!(generator.request_count(), 0);
        assert_eq!(session.response(), "prior");
    }

    #[tokio::test]
    async fn test_reply_text_is_applied_verbatim() {
        let generator = FakeGenerator::replying("He uses frequency-domain priors.");
        let mut session = AssistantSession::new();

        session.submit_query(&generator, "What is his approach to low-light vision?").await;
        assert_eq!(session.response(), "He uses frequency-domain priors.");
        assert!(!session.is_in_flight());
    }

    #[tokio::test]
    async fn test_empty_reply_shows_fallback() {
        let generator = FakeGenerator::replying("");
        let mut session = AssistantSession::new();

        session.submit_query(&generator, "Anything new?").await;
        assert_eq!(session.response(), FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_shows_fixed_error_and_resets_flag() {
        let generator = FakeGenerator::failing();
        let mut session = AssistantSession::new();

        assert!(session.submit_query(&generator, "Does it work offline?").await);
        assert_eq!(session.response(), ERROR_MESSAGE);
        assert!(!session.is_in_flight());
    }

    #[tokio::test]
    async fn test_in_flight_session_rejects_submission() {
        let generator = FakeGenerator::replying("late answer");
        let mut session = AssistantSession { response: "pending".to_string(), in_flight: true };

        assert!(!session.submit_query(&generator, "Second question").await);
        assert_eq!(generator.request_count(), 0);
        assert_eq!(session.response(), "pending");
        assert!(session.is_in_flight());
    }
}
