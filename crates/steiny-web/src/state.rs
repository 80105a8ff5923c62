use std::sync::Arc;

use axum::extract::FromRef;
use handlebars::TemplateError;
use steiny_core::SubscriptionGate;
use steiny_storage::{ObjectStore, S3Config, S3Store, StorageError};
use tracing::{info, warn};

use crate::config::Settings;
use crate::services::{PageRenderer, UploadRelay};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub gate: Arc<SubscriptionGate>,
    pub relay: Arc<UploadRelay>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        store: Option<Arc<dyn ObjectStore>>,
    ) -> Result<Self, TemplateError> {
        let gate = SubscriptionGate::new(settings.gate.password.clone());
        if !gate.is_configured() {
            warn!("SUBSCRIPTION_PASSWORD is not set; subscription login will fail");
        }

        let relay = UploadRelay::new(
            store,
            settings.storage.key_prefix.clone(),
            settings.site.media_base_url.clone(),
        );

        Ok(Self {
            settings: Arc::new(settings),
            gate: Arc::new(gate),
            relay: Arc::new(relay),
            renderer: Arc::new(PageRenderer::new()?),
        })
    }
}

/// S3 store from settings, or `None` when bucket or credentials are missing
pub fn build_object_store(
    settings: &Settings,
) -> Result<Option<Arc<dyn ObjectStore>>, StorageError> {
    if !settings.storage_configured() {
        warn!("Object storage is not configured; uploads will be rejected");
        return Ok(None);
    }

    let storage = &settings.storage;
    let store = S3Store::new(S3Config {
        bucket: storage.bucket.clone().unwrap_or_default(),
        region: storage.region.clone(),
        access_key_id: storage.access_key_id.clone().unwrap_or_default(),
        secret_access_key: storage.secret_access_key.clone().unwrap_or_default(),
        endpoint: storage.endpoint.clone().filter(|e| !e.is_empty()),
    })?;
    info!("Object storage ready (bucket {})", storage.bucket.as_deref().unwrap_or(""));

    Ok(Some(Arc::new(store)))
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

impl FromRef<AppState> for Arc<SubscriptionGate> {
    fn from_ref(state: &AppState) -> Self {
        state.gate.clone()
    }
}

impl FromRef<AppState> for Arc<UploadRelay> {
    fn from_ref(state: &AppState) -> Self {
        state.relay.clone()
    }
}

impl FromRef<AppState> for Arc<PageRenderer> {
    fn from_ref(state: &AppState) -> Self {
        state.renderer.clone()
    }
}
