//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client-supplied data failed validation
    #[error("{0}")]
    Validation(String),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Backing file could not be read or written
    #[error("Storage failure: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file contents could not be parsed
    #[error("Malformed data file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code carried by this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Io(_) | ApiError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == Error Meta ==
/// Error details attached to a response as an extension so the shaping
/// middleware can rebuild the body with the request path included.
#[derive(Debug, Clone)]
pub struct ErrorMeta {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code as a bare number
    pub status: u16,
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        let mut response = (status, body).into_response();
        response.extensions_mut().insert(ErrorMeta {
            message,
            status: status.as_u16(),
        });
        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("missing".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        let io = ApiError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_carries_meta() {
        let response = ApiError::NotFound("Item not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let meta = response
            .extensions()
            .get::<ErrorMeta>()
            .expect("error responses carry ErrorMeta");
        assert_eq!(meta.message, "Item not found");
        assert_eq!(meta.status, 404);
    }

    #[test]
    fn test_parse_error_message() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let api: ApiError = err.into();
        assert!(api.to_string().starts_with("Malformed data file"));
    }
}
