use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use steiny_core::upload::{public_url, UploadTarget};
use steiny_storage::ObjectStore;
use tracing::{error, info};

use crate::utils::error::ApiError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Fields collected from the multipart form
#[derive(Debug, Default)]
pub struct UploadRequest {
    pub file: Option<Bytes>,
    /// Name the browser sent with the file part
    pub original_name: Option<String>,
    pub content_type: Option<String>,
    pub category: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadReceipt {
    pub url: String,
    pub key: String,
}

/// Forwards one uploaded file to object storage without touching its bytes
pub struct UploadRelay {
    store: Option<Arc<dyn ObjectStore>>,
    key_prefix: String,
    public_base_url: String,
}

impl UploadRelay {
    pub fn new(
        store: Option<Arc<dyn ObjectStore>>,
        key_prefix: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    pub async fn relay(&self, request: UploadRequest) -> Result<UploadReceipt, ApiError> {
        let target = UploadTarget::from_request(
            request.file.as_deref(),
            request.category,
            request.file_name,
            request.original_name.as_deref(),
        )?;

        let store = self.store.as_ref().ok_or_else(|| {
            ApiError::Configuration("object storage credentials or bucket are not set".to_string())
        })?;

        // from_request rejects a missing file, so this is always Some here
        let body = request.file.unwrap_or_default();
        let key = target.storage_key(&self.key_prefix);
        let content_type = content_type_for(request.content_type.as_deref(), &target);

        info!("Uploading {} ({} bytes, {})", key, body.len(), content_type);

        store
            .put_object(&key, body, &content_type)
            .await
            .map_err(|e| {
                error!("Upload of {} failed: {}", key, e);
                ApiError::Upstream {
                    message: "Failed to upload file".to_string(),
                    detail: e.to_string(),
                }
            })?;

        Ok(UploadReceipt {
            url: public_url(&self.public_base_url, &key),
            key,
        })
    }
}

fn content_type_for(declared: Option<&str>, target: &UploadTarget) -> String {
    if let Some(declared) = declared.filter(|c| !c.is_empty()) {
        return declared.to_string();
    }
    target
        .extension
        .as_deref()
        .and_then(|ext| mime_guess::from_ext(ext).first_raw())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingStore;

    fn request(file: &'static [u8], original: &str) -> UploadRequest {
        UploadRequest {
            file: Some(Bytes::from_static(file)),
            original_name: Some(original.to_string()),
            content_type: None,
            category: Some("sides".to_string()),
            file_name: Some("fries".to_string()),
        }
    }

    fn relay_with(store: Arc<RecordingStore>) -> UploadRelay {
        UploadRelay::new(Some(store), "steiny", "https://media.example.com")
    }

    #[tokio::test]
    async fn test_relay_forwards_bytes_unmodified() {
        let store = Arc::new(RecordingStore::default());
        let relay = relay_with(store.clone());

        let receipt = relay.relay(request(b"\x89PNG-bytes", "IMG_1.png")).await.unwrap();
        assert_eq!(receipt.key, "steiny/sides/fries.png");
        assert_eq!(receipt.url, "https://media.example.com/steiny/sides/fries.png");

        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].1, Bytes::from_static(b"\x89PNG-bytes"));
        assert_eq!(puts[0].2, "image/png");
    }

    #[tokio::test]
    async fn test_declared_content_type_wins() {
        let store = Arc::new(RecordingStore::default());
        let relay = relay_with(store.clone());
        let mut req = request(b"data", "clip.mp4");
        req.content_type = Some("video/quicktime".to_string());

        relay.relay(req).await.unwrap();
        assert_eq!(store.puts.lock().unwrap()[0].2, "video/quicktime");
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back() {
        let store = Arc::new(RecordingStore::default());
        let relay = relay_with(store.clone());

        let receipt = relay.relay(request(b"data", "README")).await.unwrap();
        assert_eq!(receipt.key, "steiny/sides/fries");
        assert_eq!(store.puts.lock().unwrap()[0].2, FALLBACK_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_validation_never_reaches_storage() {
        let store = Arc::new(RecordingStore::default());
        let relay = relay_with(store.clone());

        let mut empty = request(b"", "a.png");
        empty.category = None;
        let err = relay.relay(empty).await.unwrap_err();
        assert_eq!(err.to_string(), "No file provided");

        let mut missing = request(b"data", "a.png");
        missing.file_name = Some(String::new());
        let err = relay.relay(missing).await.unwrap_err();
        assert_eq!(err.to_string(), "Category and fileName are required");

        assert!(store.puts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_store() {
        let relay = UploadRelay::new(None, "steiny", "https://media.example.com");
        let err = relay.relay(request(b"data", "a.png")).await.unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert_eq!(err.to_string(), "Server configuration error");
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let store = Arc::new(RecordingStore::failing());
        let relay = relay_with(store);
        let err = relay.relay(request(b"data", "a.png")).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to upload file");
    }
}
