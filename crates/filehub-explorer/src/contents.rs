//! The contents of the currently open folder.
//!
//! There is a single live entry. Loading another folder replaces it, so
//! navigating away and back always refetches.

use filehub_core::types::{FileId, FolderId, MetadataId};
use filehub_entity::file::{File, Metadata};
use filehub_entity::folder::FolderContents;

/// Single-slot cache of one folder's direct children.
///
/// `data == None` while `is_loading` means a fetch is in flight with
/// nothing to show yet; `Some` with no entries means the folder is empty.
#[derive(Debug, Clone, Default)]
pub struct ContentsCache {
    folder_id: Option<FolderId>,
    data: Option<FolderContents>,
    is_loading: bool,
}

impl ContentsCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The folder whose contents are held or loading.
    pub fn folder_id(&self) -> Option<FolderId> {
        self.folder_id
    }

    /// The loaded contents, if any.
    pub fn data(&self) -> Option<&FolderContents> {
        self.data.as_ref()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Start loading `folder_id`, dropping whatever was held.
    pub(crate) fn begin(&mut self, folder_id: FolderId) {
        self.folder_id = Some(folder_id);
        self.data = None;
        self.is_loading = true;
    }

    /// Store a completed load.
    pub(crate) fn finish(&mut self, contents: FolderContents) {
        self.data = Some(contents);
        self.is_loading = false;
    }

    /// Record a failed load: nothing to show, no longer loading.
    pub(crate) fn fail(&mut self) {
        self.data = None;
        self.is_loading = false;
    }

    /// Look up a cached file.
    pub fn file(&self, id: FileId) -> Option<&File> {
        self.data.as_ref()?.files.iter().find(|f| f.id == id)
    }

    fn file_mut(&mut self, id: FileId) -> Option<&mut File> {
        self.data.as_mut()?.files.iter_mut().find(|f| f.id == id)
    }

    /// The cached file carrying metadata entry `id`.
    pub fn owner_of(&self, id: MetadataId) -> Option<&File> {
        self.data.as_ref()?.files.iter().find(|f| f.has_metadata(id))
    }

    /// Append a created entry to its file. Returns the updated file.
    pub(crate) fn append_metadata(&mut self, file_id: FileId, entry: Metadata) -> Option<&File> {
        let file = self.file_mut(file_id)?;
        file.metadata.push(entry);
        Some(&*file)
    }

    /// Replace an entry by id on the file named by `entry.file_id`.
    /// Returns the updated file.
    pub(crate) fn replace_metadata(&mut self, entry: Metadata) -> Option<&File> {
        let file = self.file_mut(entry.file_id)?;
        let slot = file.metadata.iter_mut().find(|m| m.id == entry.id)?;
        *slot = entry;
        Some(&*file)
    }

    /// Remove entry `id` from every cached file. Returns the owning file's id.
    pub(crate) fn remove_metadata(&mut self, id: MetadataId) -> Option<FileId> {
        let mut owner = None;
        for file in self.data.as_mut()?.files.iter_mut() {
            let before = file.metadata.len();
            file.metadata.retain(|m| m.id != id);
            if file.metadata.len() != before {
                owner = Some(file.id);
            }
        }
        owner
    }
}
