//! call-summarizer - Turns call transcripts into structured clinical summaries
//!
//! A transcript and optional patient context go in, a prompt goes to an LLM,
//! and the reply is validated against a fixed schema and rendered as text.

pub mod cli;
pub mod config;
pub mod llm;
pub mod server;
pub mod summary;
