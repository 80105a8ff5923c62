//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// No shared secret configured on the server
    #[error("Server configuration error")]
    NotConfigured,

    #[error("Invalid password")]
    InvalidPassword,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,

    #[error("Category and fileName are required")]
    MissingField,

    /// `.` or `..` as a path segment
    #[error("Category and fileName must not contain relative path segments")]
    RelativePath,
}
