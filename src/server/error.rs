//! HTTP mapping of summarize failures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::summary::SummarizeError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub detail: String,
}

impl IntoResponse for SummarizeError {
    fn into_response(self) -> Response {
        // Both kinds are server-side failures; the prefix tells them apart.
        let body = ErrorBody {
            ok: false,
            detail: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
