//! Tagged folder/file items.
//!
//! Items are tagged where they enter the system (contents payloads come back
//! as separate `folders` and `files` lists), so nothing downstream needs to
//! guess an item's kind from its shape.

use filehub_core::types::{FileId, FolderId};
use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::Folder;

/// An entry in a folder's contents listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// A sub-folder.
    Folder(Folder),
    /// A file.
    File(File),
}

/// The single item currently selected in the explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SelectedItem {
    /// A selected folder.
    Folder(Folder),
    /// A selected file.
    File(File),
}

/// Identity of a selected item: its kind plus its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// Folder identity.
    Folder(FolderId),
    /// File identity.
    File(FileId),
}

impl SelectedItem {
    /// The identity of this item.
    pub fn key(&self) -> ItemKey {
        match self {
            Self::Folder(folder) => ItemKey::Folder(folder.id),
            Self::File(file) => ItemKey::File(file.id),
        }
    }

    /// Display name (`name` for folders, `filename` for files).
    pub fn label(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.filename,
        }
    }

    /// The selected file, if a file is selected.
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(file) => Some(file),
            Self::Folder(_) => None,
        }
    }

    /// The selected folder, if a folder is selected.
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    /// Mutable access to the selected file.
    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        match self {
            Self::File(file) => Some(file),
            Self::Folder(_) => None,
        }
    }
}

impl From<ContentItem> for SelectedItem {
    fn from(item: ContentItem) -> Self {
        match item {
            ContentItem::Folder(folder) => Self::Folder(folder),
            ContentItem::File(file) => Self::File(file),
        }
    }
}
