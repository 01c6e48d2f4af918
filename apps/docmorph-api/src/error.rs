//! Error types for the docmorph API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docmorph_core::{ConvertError, PageRangeError, PdfError, SplitError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    PageRange(#[from] PageRangeError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Conversion(#[from] ConvertError),

    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::PageRange(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Split(SplitError::NoPagesSelected) => (
                StatusCode::BAD_REQUEST,
                "No pages found in the specified range".to_string(),
            ),
            ApiError::Split(SplitError::Pdf(e)) | ApiError::Pdf(e) => {
                tracing::error!("PDF error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Conversion(e) => {
                tracing::error!("Conversion error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred during conversion".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
