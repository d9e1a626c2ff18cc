use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use arca_dispatch::DispatchError;
use arca_protocol::ErrorResponse;

/// Server-level failures (startup, configuration, I/O).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request failure, rendered as a structured JSON error body.
///
/// Every `DispatchError` converts into one of these at the handler
/// boundary; no request failure can crash the process.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        let status = match &err {
            DispatchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DispatchError::NotFound(_) => StatusCode::NOT_FOUND,
            DispatchError::CorruptArtifact(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DispatchError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arca_types::ArtifactId;

    #[test]
    fn status_mapping_per_taxonomy() {
        let cases = [
            (
                DispatchError::InvalidInput("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DispatchError::NotFound(ArtifactId::new(1)),
                StatusCode::NOT_FOUND,
            ),
            (
                DispatchError::CorruptArtifact("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DispatchError::Engine("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DispatchError::StorageUnavailable("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status, expected);
        }
    }
}
