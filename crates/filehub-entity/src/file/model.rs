//! File entity model.

use filehub_core::types::{FileId, FolderId, MetadataId};
use serde::{Deserialize, Serialize};

use super::Metadata;

/// A file listed inside a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub filename: String,
    /// File size in bytes, when the server reports one.
    #[serde(default)]
    pub size: Option<u64>,
    /// The folder containing this file.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    /// Key/value metadata attached to the file, in server order.
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

impl File {
    /// File size in bytes, zero when unknown.
    pub fn size_bytes(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    /// File size formatted for display.
    pub fn human_size(&self) -> String {
        format_bytes(self.size_bytes())
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.filename)
            .map(|ext| ext.to_lowercase())
    }

    /// Whether a metadata entry with `id` is attached to this file.
    pub fn has_metadata(&self, id: MetadataId) -> bool {
        self.metadata.iter().any(|m| m.id == id)
    }
}

/// Format bytes into human-readable string
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
