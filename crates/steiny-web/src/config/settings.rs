use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub gate: GateConfig,
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_mb: usize,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    pub base_url: String,
    /// Public base URL of the media bucket
    pub media_base_url: String,
    /// Adds `Secure` to the auth cookie
    pub production: bool,
    /// Serve the 402 suspension notice instead of the brochure
    pub suspended: bool,
}

#[derive(Deserialize, Serialize, Clone, Default)]
pub struct GateConfig {
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    pub region: String,
    pub bucket: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub endpoint: Option<String>,
    pub key_prefix: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PaymentConfig {
    pub buy_button_id: Option<String>,
    pub publishable_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit_mb: 50,
            request_timeout_secs: 30,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://steiny-bs.vercel.app".to_string(),
            media_base_url: "https://general-public-image-buckets.s3.amazonaws.com".to_string(),
            production: false,
            suspended: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            bucket: None,
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            key_prefix: steiny_core::upload::DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateConfig")
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "***"))
            .field("endpoint", &self.endpoint)
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

/// Conventional variable names accepted alongside `APP__SECTION__KEY`
const ENV_ALIASES: &[(&str, &str)] = &[
    ("SUBSCRIPTION_PASSWORD", "gate.password"),
    ("AWS_REGION", "storage.region"),
    ("AWS_ACCESS_KEY_ID", "storage.access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "storage.secret_access_key"),
    ("AWS_S3_BUCKET_NAME", "storage.bucket"),
    ("AWS_S3_ENDPOINT", "storage.endpoint"),
    ("PUBLIC_MEDIA_BASE_URL", "site.media_base_url"),
    ("PUBLIC_BASE_URL", "site.base_url"),
];

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in ENV_ALIASES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    pub fn storage_configured(&self) -> bool {
        let s = &self.storage;
        [&s.bucket, &s.access_key_id, &s.secret_access_key]
            .iter()
            .all(|v| v.as_deref().is_some_and(|v| !v.is_empty()))
    }
}
