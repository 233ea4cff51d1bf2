//! Configuration module for call-summarizer
//!
//! Handles loading settings from a TOML file, `.env` and the environment.

mod settings;

pub use settings::{parse_origins, LlmSettings, ServerSettings, Settings};
