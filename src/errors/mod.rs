use std::io;
use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

/// Custom error types for the wiki application
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Request path did not match a page route
    #[error("Not found")]
    NotFound,

    /// Page file could not be read; handlers recover from this
    #[error("page not found: {0}")]
    PageNotFound(String),

    /// Save request body could not be read
    #[error("{0}")]
    BadRequest(String),

    /// Template execution failed
    #[error("{0}")]
    Render(String),

    /// Template source could not be parsed at startup
    #[error("template error: {0}")]
    Template(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            WikiError::NotFound | WikiError::PageNotFound(_) => {
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            WikiError::BadRequest(e) => (StatusCode::BAD_REQUEST, e).into_response(),
            WikiError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
            WikiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e).into_response(),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_keeps_raw_message() {
        let err = WikiError::from(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        assert_eq!(err.to_string(), "permission denied");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn routing_errors_map_to_404() {
        assert_eq!(WikiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
