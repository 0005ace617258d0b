use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fetcher::{ExtractionError, FetchError};
use serde::Serialize;
use thiserror::Error;

/// Request outcomes other than success. The Display text is exactly what
/// the caller sees, so upstream detail never leaks into the response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Invalid URL format, unable to extract jobId")]
    InvalidUrl(#[from] ExtractionError),

    #[error("Job data not found")]
    NotFound,

    #[error("Failed to fetch data from the URL")]
    Upstream(#[from] FetchError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream(e) => tracing::error!(error = ?e, "Error fetching job data"),
            other => tracing::info!(error = %other, "Rejected job data request"),
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
