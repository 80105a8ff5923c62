// ============================================================================
// Steiny Storage - S3 Client
// File: crates/steiny-storage/src/s3.rs
// Description: ObjectStore over the S3 REST API with SigV4 signing
// ============================================================================

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::{header, Client, Method};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::sigv4::{amz_date, sha256_hex, uri_encode, Credentials, SignableRequest, Signer};
use crate::store::{ObjectStore, ObjectSummary};

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Custom endpoint (e.g. a local S3-compatible server). Switches to path-style URLs.
    pub endpoint: Option<String>,
}

pub struct S3Store {
    client: Client,
    signer: Signer,
    origin: String,
    host: String,
    /// Leading path segment for path-style addressing, empty otherwise
    bucket_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListBucketResult {
    #[serde(default)]
    contents: Vec<ListEntry>,
    #[serde(default)]
    is_truncated: bool,
    next_continuation_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListEntry {
    key: String,
    #[serde(default)]
    size: u64,
    last_modified: Option<String>,
}

impl From<ListEntry> for ObjectSummary {
    fn from(entry: ListEntry) -> Self {
        let last_modified = entry
            .last_modified
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        ObjectSummary {
            key: entry.key,
            size: entry.size,
            last_modified,
        }
    }
}

impl S3Store {
    pub fn new(config: S3Config) -> Result<Self, StorageError> {
        if config.bucket.is_empty() {
            return Err(StorageError::Config("bucket name is not set".to_string()));
        }
        if config.access_key_id.is_empty() || config.secret_access_key.is_empty() {
            return Err(StorageError::Config("credentials are not set".to_string()));
        }

        let (origin, bucket_path) = match config.endpoint.as_deref() {
            Some(endpoint) => (
                endpoint.trim_end_matches('/').to_string(),
                format!("/{}", uri_encode(&config.bucket, true)),
            ),
            None => (
                format!("https://{}.s3.{}.amazonaws.com", config.bucket, config.region),
                String::new(),
            ),
        };

        let parsed = reqwest::Url::parse(&origin)
            .map_err(|e| StorageError::Config(format!("invalid endpoint {}: {}", origin, e)))?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(h), Some(p)) => format!("{}:{}", h, p),
            (Some(h), None) => h.to_string(),
            (None, _) => {
                return Err(StorageError::Config(format!("endpoint has no host: {}", origin)))
            }
        };

        let signer = Signer::new(
            Credentials {
                access_key_id: config.access_key_id,
                secret_access_key: config.secret_access_key,
            },
            config.region,
        );

        info!("S3 store ready: {}{}", origin, bucket_path);

        Ok(Self {
            client: Client::new(),
            signer,
            origin,
            host,
            bucket_path,
        })
    }

    /// Keys with `.` or `..` segments are refused: the URL parser would
    /// normalize them and the request would no longer match its signature.
    fn object_uri(&self, key: &str) -> Result<String, StorageError> {
        if key.split('/').any(|seg| seg == "." || seg == "..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(format!("{}/{}", self.bucket_path, uri_encode(key, false)))
    }

    fn bucket_uri(&self) -> String {
        if self.bucket_path.is_empty() {
            "/".to_string()
        } else {
            self.bucket_path.clone()
        }
    }

    async fn send_signed(
        &self,
        method: Method,
        canonical_uri: &str,
        query: &[(&str, &str)],
        signed_extra: &[(&str, &str)],
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<reqwest::Response, StorageError> {
        let now = Utc::now();
        let date = amz_date(now);
        let payload_hash = sha256_hex(&body);

        let mut headers: Vec<(&str, &str)> = vec![
            ("host", self.host.as_str()),
            ("x-amz-content-sha256", payload_hash.as_str()),
            ("x-amz-date", date.as_str()),
        ];
        headers.extend_from_slice(signed_extra);

        let signable = SignableRequest {
            method: method.as_str(),
            canonical_uri,
            query,
            headers: &headers,
            payload_hash: &payload_hash,
        };
        let authorization = self.signer.authorization(&signable, now)?;

        let query_string = query
            .iter()
            .map(|(k, v)| format!("{}={}", uri_encode(k, true), uri_encode(v, true)))
            .collect::<Vec<_>>()
            .join("&");
        let url = if query_string.is_empty() {
            format!("{}{}", self.origin, canonical_uri)
        } else {
            format!("{}{}?{}", self.origin, canonical_uri, query_string)
        };

        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header(header::AUTHORIZATION, authorization)
            .header("x-amz-content-sha256", &payload_hash)
            .header("x-amz-date", &date);
        for (name, value) in signed_extra {
            request = request.header(*name, *value);
        }
        if let Some(ct) = content_type {
            request = request.header(header::CONTENT_TYPE, ct);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("S3 request failed with {}: {}", status, body);
            return Err(StorageError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = body.len();
        let uri = self.object_uri(key)?;
        self.send_signed(
            Method::PUT,
            &uri,
            &[],
            &[("x-amz-acl", "public-read")],
            Some(content_type),
            body,
        )
        .await?;
        info!("Stored {} ({} bytes, {})", key, size, content_type);
        Ok(())
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectSummary>, StorageError> {
        let uri = self.bucket_uri();
        let mut objects = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = vec![("list-type", "2"), ("prefix", prefix)];
            if let Some(t) = token.as_deref() {
                query.push(("continuation-token", t));
            }

            let response = self
                .send_signed(Method::GET, &uri, &query, &[], None, Bytes::new())
                .await?;
            let xml = response.text().await?;
            let page: ListBucketResult = quick_xml::de::from_str(&xml)
                .map_err(|e| StorageError::Decode(e.to_string()))?;

            objects.extend(page.contents.into_iter().map(ObjectSummary::from));

            match (page.is_truncated, page.next_continuation_token) {
                (true, Some(next)) => token = Some(next),
                _ => break,
            }
        }

        debug!("Listed {} objects under {}", objects.len(), prefix);
        Ok(objects)
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let uri = self.object_uri(key)?;
        self.send_signed(
            Method::DELETE,
            &uri,
            &[],
            &[],
            None,
            Bytes::new(),
        )
        .await?;
        info!("Deleted {}", key);
        Ok(())
    }
}
