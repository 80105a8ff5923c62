//! AWS Signature Version 4 for S3 requests.
//!
//! Only header-based signing is implemented. Presigned URLs are not.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::StorageError;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// The parts of a request that are covered by the signature
#[derive(Debug, Clone)]
pub struct SignableRequest<'a> {
    pub method: &'a str,
    /// Path, already URI-encoded
    pub canonical_uri: &'a str,
    /// Raw (unencoded) query parameters
    pub query: &'a [(&'a str, &'a str)],
    /// Every header to sign, including `host` and the `x-amz-*` headers
    pub headers: &'a [(&'a str, &'a str)],
    pub payload_hash: &'a str,
}

#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
    region: String,
    service: &'static str,
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub fn amz_date(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

/// RFC 3986 encoding as S3 expects it. `/` is kept when `encode_slash` is false.
pub fn uri_encode(input: &str, encode_slash: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b'/' if !encode_slash => out.push('/'),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, StorageError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| StorageError::Config(format!("HMAC error: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl<'a> SignableRequest<'a> {
    fn canonical_query(&self) -> String {
        let mut pairs: Vec<(String, String)> = self
            .query
            .iter()
            .map(|(k, v)| (uri_encode(k, true), uri_encode(v, true)))
            .collect();
        pairs.sort();
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn sorted_headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.trim().to_string()))
            .collect();
        headers.sort();
        headers
    }

    pub fn signed_headers(&self) -> String {
        self.sorted_headers()
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn canonical_request(&self) -> String {
        let canonical_headers: String = self
            .sorted_headers()
            .iter()
            .map(|(k, v)| format!("{}:{}\n", k, v))
            .collect();

        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            self.method,
            self.canonical_uri,
            self.canonical_query(),
            canonical_headers,
            self.signed_headers(),
            self.payload_hash
        )
    }
}

impl Signer {
    pub fn new(credentials: Credentials, region: impl Into<String>) -> Self {
        Self {
            credentials,
            region: region.into(),
            service: "s3",
        }
    }

    fn scope(&self, at: DateTime<Utc>) -> String {
        format!(
            "{}/{}/{}/aws4_request",
            at.format("%Y%m%d"),
            self.region,
            self.service
        )
    }

    pub fn string_to_sign(&self, request: &SignableRequest<'_>, at: DateTime<Utc>) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date(at),
            self.scope(at),
            sha256_hex(request.canonical_request().as_bytes())
        )
    }

    fn signing_key(&self, at: DateTime<Utc>) -> Result<Vec<u8>, StorageError> {
        let secret = format!("AWS4{}", self.credentials.secret_access_key);
        let date_key = hmac_sha256(secret.as_bytes(), at.format("%Y%m%d").to_string().as_bytes())?;
        let region_key = hmac_sha256(&date_key, self.region.as_bytes())?;
        let service_key = hmac_sha256(&region_key, self.service.as_bytes())?;
        hmac_sha256(&service_key, b"aws4_request")
    }

    pub fn signature(
        &self,
        request: &SignableRequest<'_>,
        at: DateTime<Utc>,
    ) -> Result<String, StorageError> {
        let key = self.signing_key(at)?;
        let string_to_sign = self.string_to_sign(request, at);
        Ok(hex::encode(hmac_sha256(&key, string_to_sign.as_bytes())?))
    }

    /// Value for the `Authorization` header
    pub fn authorization(
        &self,
        request: &SignableRequest<'_>,
        at: DateTime<Utc>,
    ) -> Result<String, StorageError> {
        Ok(format!(
            "{} Credential={}/{},SignedHeaders={},Signature={}",
            ALGORITHM,
            self.credentials.access_key_id,
            self.scope(at),
            request.signed_headers(),
            self.signature(request, at)?
        ))
    }
}
