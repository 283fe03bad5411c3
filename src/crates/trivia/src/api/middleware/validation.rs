//! Request extraction helpers
//!
//! Map axum's path and JSON rejections onto the service's error taxonomy so
//! that no framework plain-text error reaches the client.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};

use crate::api::error::{ApiError, ApiResult};

/// Unwrap an integer path id; anything else is a missing resource
pub fn path_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::NotFound(rejection.body_text()))
}

/// Unwrap a JSON body, reporting a rejection as a bad request
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// Unwrap a JSON body, reporting a rejection as unprocessable
pub fn json_entity<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::UnprocessableEntity(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_json_body_passes_value_through() {
        let value = json_body(Ok(Json(5))).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_path_id_passes_value_through() {
        assert_eq!(path_id(Ok(Path(12))).unwrap(), 12);
    }

    #[test]
    fn test_error_statuses() {
        let bad = ApiError::BadRequest(String::new());
        let entity = ApiError::UnprocessableEntity(String::new());
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(entity.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
