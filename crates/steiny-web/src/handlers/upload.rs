use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::services::{UploadRelay, UploadRequest};
use crate::utils::error::ApiError;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub key: String,
}

/// Body over the configured limit is 413; anything else malformed is 400.
/// The multer detail is logged, never returned.
fn read_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        tracing::debug!("Multipart read failed: {}", err.body_text());
        ApiError::BadRequest("Invalid request".to_string())
    }
}

/// Multipart fields: `file`, `category`, `fileName`
pub async fn upload_handler(
    State(relay): State<Arc<UploadRelay>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart =
        multipart.map_err(|_| ApiError::BadRequest("Invalid request".to_string()))?;

    info!("File upload request received");

    let mut request = UploadRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(read_error)?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                request.original_name = field.file_name().map(|s| s.to_string());
                request.content_type = field.content_type().map(|s| s.to_string());
                request.file = Some(
                    field
                        .bytes()
                        .await
                        .map_err(read_error)?,
                );
            }
            "category" => {
                request.category = Some(
                    field
                        .text()
                        .await
                        .map_err(read_error)?,
                );
            }
            "fileName" => {
                request.file_name = Some(
                    field
                        .text()
                        .await
                        .map_err(read_error)?,
                );
            }
            _ => {}
        }
    }

    let receipt = relay.relay(request).await?;
    info!("Uploaded {}", receipt.key);

    Ok(Json(UploadResponse {
        success: true,
        url: receipt.url,
        key: receipt.key,
    }))
}
