//! Request and response models for transcript summarization

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::summary::render::render_pretty_text;

/// Patient age as sent by callers: either free text ("34", "6 months") or whole years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "AgeRepr")]
pub enum Age {
    Years(i64),
    Text(String),
}

/// Wire form of [`Age`]: any JSON number or string.
#[derive(Deserialize)]
#[serde(untagged)]
enum AgeRepr {
    Number(serde_json::Number),
    Text(String),
}

impl From<AgeRepr> for Age {
    fn from(repr: AgeRepr) -> Self {
        match repr {
            AgeRepr::Text(text) => Self::Text(text),
            AgeRepr::Number(number) => {
                if let Some(years) = number.as_i64() {
                    return Self::Years(years);
                }
                // 34.0 counts as whole years; fractions and huge values keep their digits.
                match number.as_f64() {
                    Some(value)
                        if value.fract() == 0.0
                            && value >= i64::MIN as f64
                            && value < i64::MAX as f64 =>
                    {
                        Self::Years(value as i64)
                    }
                    _ => Self::Text(number.to_string()),
                }
            }
        }
    }
}

impl Age {
    /// Parse a command-line value, preferring whole years when it is numeric.
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .map(Self::Years)
            .unwrap_or_else(|_| Self::Text(value.to_string()))
    }

    /// Zero years and the empty string carry no information.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Years(years) => *years == 0,
            Self::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{}", years),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Optional patient metadata attached to a summarize request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseContext {
    #[serde(rename = "patientName", default)]
    pub patient_name: Option<String>,

    #[serde(default)]
    pub age: Option<Age>,

    #[serde(default)]
    pub sex: Option<String>,
}

/// Inbound body of `POST /summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Plain text transcript
    pub transcript: String,

    #[serde(default)]
    pub context: Option<CaseContext>,
}

/// Structured summary the model is instructed to return.
///
/// Only `patient_overview` is required; every other field falls back to
/// empty when the model leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryJson {
    pub patient_overview: String,

    #[serde(default)]
    pub key_findings: Vec<String>,

    #[serde(default)]
    pub differentials: Vec<String>,

    #[serde(default)]
    pub decisions: String,

    #[serde(default)]
    pub next_steps: Vec<String>,

    #[serde(default)]
    pub followups: Vec<String>,

    #[serde(default)]
    pub red_flags: Vec<String>,
}

/// Successful summarize result. `pretty_text` is always derived from `summary_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeResponse {
    ok: bool,
    summary_json: SummaryJson,
    pretty_text: String,
}

impl SummarizeResponse {
    pub fn new(summary_json: SummaryJson) -> Self {
        let pretty_text = render_pretty_text(&summary_json);
        Self {
            ok: true,
            summary_json,
            pretty_text,
        }
    }

    pub fn summary(&self) -> &SummaryJson {
        &self.summary_json
    }

    pub fn pretty_text(&self) -> &str {
        &self.pretty_text
    }
}
