//! Bulk removal of everything under a key prefix

use tracing::{error, info};

use crate::error::StorageError;
use crate::store::{ObjectStore, ObjectSummary};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PurgeReport {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Lists `prefix` and deletes each object. Individual failures are recorded
/// and do not stop the purge; a failed listing does.
pub async fn purge_prefix(
    store: &dyn ObjectStore,
    prefix: &str,
) -> Result<PurgeReport, StorageError> {
    let objects = store.list_objects(prefix).await?;
    info!("Purging {} objects under {}", objects.len(), prefix);
    Ok(delete_all(store, objects).await)
}

/// Deletes an already listed set of objects, one request each
pub async fn delete_all(store: &dyn ObjectStore, objects: Vec<ObjectSummary>) -> PurgeReport {
    let mut report = PurgeReport::default();
    for object in objects {
        match store.delete_object(&object.key).await {
            Ok(()) => report.deleted.push(object.key),
            Err(e) => {
                error!("Failed to delete {}: {}", object.key, e);
                report.failed.push((object.key, e.to_string()));
            }
        }
    }
    report
}
