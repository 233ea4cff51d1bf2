//! Summarize request handling: prompt, upstream call, validation, rendering

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::llm::{build_summary_prompt, LlmProvider};
use crate::summary::models::{SummarizeRequest, SummarizeResponse};
use crate::summary::schema::{parse_summary, SchemaError};

/// Failure of a single summarize call. Nothing partial is returned.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The model call failed or its reply was not JSON.
    #[error("LLM_error: {0}")]
    Upstream(String),

    /// The model replied with JSON that breaks the summary schema.
    #[error("schema_violation: {0}")]
    SchemaViolation(String),
}

impl SummarizeError {
    pub fn category(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "LLM_error",
            Self::SchemaViolation(_) => "schema_violation",
        }
    }
}

impl From<SchemaError> for SummarizeError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::MalformedOutput(_) => Self::Upstream(err.to_string()),
            SchemaError::SchemaViolation(_) => Self::SchemaViolation(err.to_string()),
        }
    }
}

/// Validate raw model output and build the response around it.
pub fn summarize_raw(raw: &str) -> Result<SummarizeResponse, SummarizeError> {
    let summary = parse_summary(raw)?;
    Ok(SummarizeResponse::new(summary))
}

/// Turns transcripts into summaries through one LLM provider.
#[derive(Clone)]
pub struct Summarizer {
    provider: Arc<dyn LlmProvider>,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, SummarizeError> {
        let span = info_span!(
            "summarize",
            request_id = %Uuid::new_v4(),
            provider = self.provider.name()
        );

        async {
            let prompt = build_summary_prompt(&request.transcript, request.context.as_ref());

            let raw = self.provider.complete(&prompt).await.map_err(|e| {
                warn!("Upstream call failed: {:#}", e);
                SummarizeError::Upstream(format!("{:#}", e))
            })?;

            let response = summarize_raw(&raw).inspect_err(|e| {
                warn!("Rejected model output: {}", e);
            })?;

            info!(
                transcript_chars = request.transcript.chars().count(),
                "Summary generated"
            );
            Ok::<_, SummarizeError>(response)
        }
        .instrument(span)
        .await
    }
}
