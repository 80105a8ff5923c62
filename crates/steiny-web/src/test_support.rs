use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use steiny_storage::{ObjectStore, ObjectSummary, StorageError};

/// In-memory store that records every put
#[derive(Default)]
pub struct RecordingStore {
    pub puts: Mutex<Vec<(String, Bytes, String)>>,
    pub fail: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::Status {
                status: 403,
                body: "AccessDenied".to_string(),
            });
        }
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), body, content_type.to_string()));
        Ok(())
    }

    async fn list_objects(&self, _prefix: &str) -> Result<Vec<ObjectSummary>, StorageError> {
        Ok(Vec::new())
    }

    async fn delete_object(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
