use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// An id-scoped lookup found no record.
    #[error("{kind} not found")]
    NotFound { kind: &'static str },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // a bare `String` body is sent as text/plain
        (self.status_code(), self.to_string()).into_response()
    }
}
