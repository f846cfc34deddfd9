use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lexi_core::DictionaryError;
use lexi_import::ImportError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Word not found")]
    NotFound,

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("Error processing file: {0}")]
    Import(#[from] ImportError),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Carries 413 when the upload exceeds the body limit
            ApiError::Multipart(e) => e.status(),
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Dictionary(DictionaryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Dictionary(_) => StatusCode::BAD_REQUEST,
            ApiError::Import(ImportError::UnsupportedFormat(_)) => StatusCode::BAD_REQUEST,
            ApiError::Import(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Dictionary(DictionaryError::NotFound { .. }) => "Word not found".to_string(),
            ApiError::Import(ImportError::UnsupportedFormat(_)) => "Invalid file type".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
