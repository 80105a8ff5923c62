use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use steiny_core::{GateError, UploadError};
use thiserror::Error;

/// Errors returned by the JSON API. The display text is what the client sees.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("File too large")]
    PayloadTooLarge(String),

    /// Missing secret or storage credentials
    #[error("Server configuration error")]
    Configuration(String),

    /// Object storage rejected or failed the request
    #[error("{message}")]
    Upstream { message: String, detail: String },

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                StatusCode::UNAUTHORIZED
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge(detail) => {
                tracing::warn!("Payload too large: {}", detail);
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Configuration(detail) => {
                tracing::error!("Configuration error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream { detail, .. } => {
                tracing::error!("Upstream error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<GateError> for ApiError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::NotConfigured => {
                ApiError::Configuration("subscription password is not set".to_string())
            }
            GateError::InvalidPassword => ApiError::Unauthorized(err.to_string()),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_error_mapping() {
        let err = ApiError::from(GateError::InvalidPassword);
        assert_eq!(err.to_string(), "Invalid password");
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

        let err = ApiError::from(GateError::NotConfigured);
        assert_eq!(err.to_string(), "Server configuration error");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upload_error_mapping() {
        let err = ApiError::from(UploadError::MissingFile);
        assert_eq!(err.to_string(), "No file provided");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_payload_too_large_hides_detail() {
        let err = ApiError::PayloadTooLarge("length limit exceeded".to_string());
        assert_eq!(err.to_string(), "File too large");
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_relative_path_is_bad_request() {
        let err = ApiError::from(UploadError::RelativePath);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_hides_detail() {
        let err = ApiError::Upstream {
            message: "Failed to upload file".to_string(),
            detail: "status 403: AccessDenied".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to upload file");
    }
}
