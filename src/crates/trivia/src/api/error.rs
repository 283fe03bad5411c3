//! API error types and HTTP response conversion
//!
//! Every failure leaves the service as `{success: false, error: <status>,
//! message: <text>}` with one fixed message per status. The detailed cause is
//! logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DatabaseError;

/// API error response structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always false
    pub success: bool,
    /// HTTP status code
    pub error: u16,
    /// Fixed human-readable message for the status code
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
///
/// Store failures convert into [`ApiError::DatabaseError`] and answer 400;
/// the create path maps its failures to [`ApiError::UnprocessableEntity`]
/// explicitly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing entity, or an empty result that is treated as a failure
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request, or a quiz with nothing left to ask
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Question payload or insert rejected
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Route exists but not for this verb
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Uncaught server-side fault
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// Store failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DatabaseError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The message sent to clients
    pub fn message(&self) -> &'static str {
        message_for(self.status_code())
    }

    /// Error for a bare framework response with `status`, if it is one the
    /// service answers with its own envelope
    pub fn from_status(status: StatusCode) -> Option<ApiError> {
        let reason = status.canonical_reason().unwrap_or("unknown").to_string();
        match status {
            StatusCode::NOT_FOUND => Some(ApiError::NotFound(reason)),
            StatusCode::BAD_REQUEST => Some(ApiError::BadRequest(reason)),
            StatusCode::UNPROCESSABLE_ENTITY => Some(ApiError::UnprocessableEntity(reason)),
            StatusCode::METHOD_NOT_ALLOWED => Some(ApiError::MethodNotAllowed),
            StatusCode::INTERNAL_SERVER_ERROR => Some(ApiError::InternalError(reason)),
            _ => None,
        }
    }

    /// Build the response body for this error
    pub fn to_body(&self) -> ApiErrorResponse {
        ApiErrorResponse::new(self.status_code(), self.message())
    }
}

/// Fixed client-facing message for each status the service produces
pub fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "Invalid method!",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable resource",
        _ => "Internal server error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                tracing::error!(status = status.as_u16(), "{}", self)
            }
            _ => tracing::warn!(status = status.as_u16(), "{}", self),
        }

        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ApiError::NotFound("question 7".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Resource not found");
    }

    #[test]
    fn test_unprocessable_error() {
        let err = ApiError::UnprocessableEntity("missing field `answer`".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message(), "Unprocessable resource");
    }

    #[test]
    fn test_database_error_is_bad_request() {
        let err: ApiError = DatabaseError::QueryError("disk I/O error".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Bad request");
    }

    #[test]
    fn test_body_hides_cause() {
        let body = ApiError::BadRequest("no such table: questions".to_string()).to_body();
        assert_eq!(
            body,
            ApiErrorResponse {
                success: false,
                error: 400,
                message: "Bad request".to_string(),
            }
        );
    }

    #[test]
    fn test_from_status() {
        let err = ApiError::from_status(StatusCode::METHOD_NOT_ALLOWED).unwrap();
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message(), "Invalid method!");

        assert!(ApiError::from_status(StatusCode::UNSUPPORTED_MEDIA_TYPE).is_none());
        assert!(ApiError::from_status(StatusCode::OK).is_none());
    }

    #[test]
    fn test_every_code_has_fixed_message() {
        let expected = [
            (StatusCode::BAD_REQUEST, "Bad request"),
            (StatusCode::NOT_FOUND, "Resource not found"),
            (StatusCode::METHOD_NOT_ALLOWED, "Invalid method!"),
            (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable resource"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ];
        for (status, message) in expected {
            assert_eq!(message_for(status), message);
        }
    }
}
