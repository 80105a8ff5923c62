//! # Steiny Storage
//!
//! Object storage for uploaded site media: the `ObjectStore` seam, an S3
//! implementation signed with AWS Signature Version 4, and bulk helpers.

pub mod error;
pub mod purge;
pub mod s3;
pub mod sigv4;
pub mod store;

pub use error::StorageError;
pub use purge::{delete_all, purge_prefix, PurgeReport};
pub use s3::{S3Config, S3Store};
pub use store::{ObjectStore, ObjectSummary};
