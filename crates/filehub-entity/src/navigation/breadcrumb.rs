//! Ancestry and breadcrumb entries.

use filehub_core::types::{FileId, FolderId};
use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::Folder;

/// One step of a root-to-folder ancestry chain, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryEntry {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
}

/// A single element of the breadcrumb path.
///
/// Only the terminal element can be a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Breadcrumb {
    /// A folder on the path.
    Folder {
        /// Folder ID.
        id: FolderId,
        /// Folder name.
        name: String,
    },
    /// The selected file at the end of the path.
    File {
        /// File ID.
        id: FileId,
        /// File name.
        filename: String,
    },
}

impl Breadcrumb {
    /// The text shown for this entry.
    pub fn label(&self) -> &str {
        match self {
            Self::Folder { name, .. } => name,
            Self::File { filename, .. } => filename,
        }
    }

    /// The folder ID, when this entry is a folder.
    pub fn folder_id(&self) -> Option<FolderId> {
        match self {
            Self::Folder { id, .. } => Some(*id),
            Self::File { .. } => None,
        }
    }
}

impl From<AncestryEntry> for Breadcrumb {
    fn from(entry: AncestryEntry) -> Self {
        Self::Folder {
            id: entry.id,
            name: entry.name,
        }
    }
}

impl From<&Folder> for Breadcrumb {
    fn from(folder: &Folder) -> Self {
        Self::Folder {
            id: folder.id,
            name: folder.name.clone(),
        }
    }
}

impl From<&File> for Breadcrumb {
    fn from(file: &File) -> Self {
        Self::File {
            id: file.id,
            filename: file.filename.clone(),
        }
    }
}
