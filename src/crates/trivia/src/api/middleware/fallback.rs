//! JSON envelopes for responses the router produces on its own
//!
//! Unknown paths, wrong verbs and handler panics would otherwise leave the
//! service with an empty or plain-text body.

use std::any::Any;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::error::ApiError;

/// Router fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound("no route".to_string())
}

/// Replace a bare framework error response with the JSON error envelope
///
/// Responses that already carry a JSON body pass through untouched.
pub async fn json_error_envelope(response: Response) -> Response {
    if is_json(&response) {
        return response;
    }

    match ApiError::from_status(response.status()) {
        Some(err) => err.into_response(),
        None => response,
    }
}

/// Response for a panic caught in a handler
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::InternalError(detail).into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bare_405_gets_envelope() {
        let bare = Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .body(Body::empty())
            .unwrap();

        let response = json_error_envelope(bare).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 405);
        assert_eq!(body["message"], "Invalid method!");
    }

    #[tokio::test]
    async fn test_json_responses_pass_through() {
        let original = ApiError::NotFound("question 3".to_string()).into_response();
        let response = json_error_envelope(original).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Resource not found");
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let ok = Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::empty())
            .unwrap();
        assert_eq!(json_error_envelope(ok).await.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_panic_response() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "Internal server error");
    }
}
