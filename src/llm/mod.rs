//! LLM module for call-summarizer
//!
//! Builds the summary prompt and talks to the configured model provider
//! (OpenAI by default, Gemini as an alternative).

mod client;
mod gemini;
mod openai;
mod prompts;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use prompts::build_summary_prompt;
