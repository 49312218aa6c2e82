//! File metadata entries.

use filehub_core::types::{FileId, MetadataId};
use serde::{Deserialize, Serialize};

/// A single key/value pair attached to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Server-assigned identifier.
    pub id: MetadataId,
    /// The file this entry belongs to.
    pub file_id: FileId,
    /// Entry key.
    pub key: String,
    /// Entry value, possibly a JSON-encoded document.
    pub value: String,
}

impl Metadata {
    /// The value as it should be displayed.
    ///
    /// JSON values are pretty-printed; anything else is returned verbatim.
    /// The stored value is never changed.
    pub fn display_value(&self) -> String {
        match serde_json::from_str::<serde_json::Value>(&self.value) {
            Ok(parsed) => serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| self.value.clone()),
            Err(_) => self.value.clone(),
        }
    }
}

/// Request body for creating a metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMetadata {
    /// Entry key.
    pub key: String,
    /// Entry value.
    pub value: String,
}

impl NewMetadata {
    /// Build a new entry body.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request body for changing a metadata entry's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPatch {
    /// The new value.
    pub value: String,
}

impl MetadataPatch {
    /// Build a patch setting `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
