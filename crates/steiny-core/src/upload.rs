//! Upload targets and storage key formation

use validator::Validate;

use crate::error::UploadError;

pub const DEFAULT_KEY_PREFIX: &str = "steiny";

/// Where one uploaded blob should land
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UploadTarget {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "fileName is required"))]
    pub file_name: String,

    /// Extension of the uploaded file, without the dot
    pub extension: Option<String>,
}

impl UploadTarget {
    /// Validates a relay request. Checks the file first, then the two fields,
    /// then rejects `.`/`..` segments, which HTTP clients collapse.
    pub fn from_request(
        file: Option<&[u8]>,
        category: Option<String>,
        file_name: Option<String>,
        original_name: Option<&str>,
    ) -> Result<Self, UploadError> {
        match file {
            Some(bytes) if !bytes.is_empty() => {}
            _ => return Err(UploadError::MissingFile),
        }

        let target = Self {
            category: category.unwrap_or_default(),
            file_name: file_name.unwrap_or_default(),
            extension: original_name.and_then(extension_of),
        };
        target.validate().map_err(|_| UploadError::MissingField)?;
        if has_relative_segment(&target.category) || has_relative_segment(&target.file_name) {
            return Err(UploadError::RelativePath);
        }
        Ok(target)
    }

    /// `{prefix}/{category}/{file_name}.{ext}`. Existing keys are overwritten by the store.
    pub fn storage_key(&self, prefix: &str) -> String {
        let base = format!(
            "{}/{}/{}",
            prefix.trim_end_matches('/'),
            self.category,
            self.file_name
        );
        match &self.extension {
            Some(ext) => format!("{}.{}", base, ext),
            None => base,
        }
    }
}

pub fn has_relative_segment(path: &str) -> bool {
    path.split('/').any(|seg| seg == "." || seg == "..")
}

/// Text after the last dot of a file name, if any
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_string())
}

/// Public URL of an uploaded object
pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}
