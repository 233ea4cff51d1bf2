//! Summary module for call-summarizer
//!
//! Request/response models, validation of model output, text rendering and
//! the request handler that ties them to an LLM provider.

pub mod models;
pub mod render;
pub mod schema;
pub mod service;

pub use models::{Age, CaseContext, SummarizeRequest, SummarizeResponse, SummaryJson};
pub use render::render_pretty_text;
pub use schema::{parse_summary, SchemaError};
pub use service::{summarize_raw, SummarizeError, Summarizer};
