//! The uniform response envelope returned by every proxy endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUCCESS_MESSAGE: &str = "Successfully fetched the data";
pub const FAILURE_MESSAGE: &str = "Failed to fetch data from the API";

/// Normalized result of one upstream call.
///
/// Only constructible through [`Envelope::success`] and
/// [`Envelope::failure`], so `status` and `success` always agree: 200 with
/// `success == true`, 500 with `success == false`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    status: u16,
    success: bool,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<Value>,
}

impl Envelope {
    /// Wraps a usable upstream payload.
    pub fn success(data: Value) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Wraps an upstream failure with whatever detail is available.
    pub fn failure(error: Value) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            data: None,
            error: Some(error),
        }
    }

    /// Normalizes the outcome of an upstream call. Failures are logged.
    pub fn from_result(result: Result<Value, gnews_api::Error>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => {
                let detail = e.detail();
                tracing::error!("API request error: {} | detail: {}", e, detail);
                Self::failure(detail)
            }
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    /// Consumes the envelope, returning the payload of a successful call.
    pub fn into_data(self) -> Option<Value> {
        if self.success {
            self.data
        } else {
            None
        }
    }

    /// HTTP status to answer with. Falls back to 500 for an out-of-range
    /// status read from the wire.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
