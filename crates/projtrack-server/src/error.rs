//! API error types and handling

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use projtrack_core::error::{Error, ErrorKind};
use serde_json::json;

/// Core error carried to the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::validation(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.kind() == ErrorKind::Unhandled {
            tracing::error!(code = err.code(), error = %err, "Request failed");
        } else {
            tracing::debug!(code = err.code(), error = %err, "Request rejected");
        }

        let mut body = json!({
            "ok": false,
            "type": err.kind().as_str(),
            "message": err.to_string(),
        });
        if !err.failures().is_empty() {
            body["errors"] = json!(err.failures());
        }

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
