//! Direct contents of a folder.

use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::navigation::ContentItem;

use super::Folder;

/// Sub-folders and files directly inside one folder (not recursive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderContents {
    /// Direct sub-folders.
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// Direct files.
    #[serde(default)]
    pub files: Vec<File>,
}

impl FolderContents {
    /// Whether the folder holds neither sub-folders nor files.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    /// All entries tagged with their kind, folders first.
    pub fn items(&self) -> impl Iterator<Item = ContentItem> + '_ {
        self.folders
            .iter()
            .cloned()
            .map(ContentItem::Folder)
            .chain(self.files.iter().cloned().map(ContentItem::File))
    }
}
