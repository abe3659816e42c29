use std::time::Duration;

use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

/// Body returned to the client when validation fails.
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// Body returned to the client for every internal failure.
pub const FAILURE_MESSAGE: &str = "Summarization failed";

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Completion service error: {0}")]
    UpstreamError(String),

    #[error("Completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError(_)
            | AppError::Timeout(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => NO_TEXT_MESSAGE,
            _ => FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.public_message().to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = AppError::InvalidInput("text is blank".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "No text provided");
    }

    #[test]
    fn internal_errors_hide_details() {
        let errors = [
            AppError::UpstreamError("401 invalid api key sk-123".into()),
            AppError::Timeout(Duration::from_secs(30)),
            AppError::ConfigError("missing key".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.public_message(), "Summarization failed");
        }
    }
}
