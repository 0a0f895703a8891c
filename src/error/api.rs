//! Per-request HTTP errors
//!
//! Each variant maps to one status code and a plain-text body. None of them
//! touches the store.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent with every 405
pub const INVALID_METHOD_MESSAGE: &str = "Invalid request method";

/// Errors returned to HTTP clients
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The endpoint does not serve this HTTP method
    #[error("Invalid request method")]
    MethodNotAllowed { method: Method },

    /// The request body is not `{"value": <float>}`
    #[error("Invalid body: {reason}")]
    MalformedBody { reason: String },

    /// The stored value could not be written as JSON
    #[error("Failed to encode response: {reason}")]
    EncodeFailure { reason: String },
}

impl ApiError {
    /// Create a MethodNotAllowed error for the rejected method
    pub fn method_not_allowed(method: Method) -> Self {
        Self::MethodNotAllowed { method }
    }

    /// Create a MalformedBody error with the decoder message
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self::MalformedBody {
            reason: reason.into(),
        }
    }

    /// Create an EncodeFailure error
    pub fn encode_failure(reason: impl Into<String>) -> Self {
        Self::EncodeFailure {
            reason: reason.into(),
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::EncodeFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_method_not_allowed() {
        let err = ApiError::method_not_allowed(Method::PUT);
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Invalid request method");
    }

    #[test]
    fn test_malformed_body() {
        let err = ApiError::malformed_body("missing field `value`");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid body: missing field `value`");
    }

    #[test]
    fn test_encode_failure() {
        let err = ApiError::encode_failure("NaN has no JSON representation");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Failed to encode response"));
    }

    #[tokio::test]
    async fn test_into_response_is_plain_text() {
        let response = ApiError::malformed_body("oops").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Invalid body: oops");
    }
}
