//! noctivis-llm — generative-text backend abstraction.
//! One narrow capability: turn a prompt into a reply string. The web layer
//! depends only on the `TextGenerator` trait so it can be tested against a
//! fake implementation.

pub mod backend;

pub use backend::{GeminiBackend, LlmError, OpenAiCompatibleBackend, TextGenerator};
