//! Selected item and breadcrumb path.

use filehub_core::types::{FileId, FolderId, MetadataId};
use filehub_entity::file::{File, Metadata};
use filehub_entity::folder::Folder;
use filehub_entity::navigation::{AncestryEntry, Breadcrumb, ItemKey, SelectedItem};

/// Selection state: the folder highlighted in the tree, the selected item,
/// and the breadcrumb path derived from the selected item.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    folder: Option<Folder>,
    item: Option<SelectedItem>,
    breadcrumbs: Vec<Breadcrumb>,
}

/// How to obtain the breadcrumb path for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbPlan {
    /// The path is known without asking the server.
    Ready(Vec<Breadcrumb>),
    /// Fetch the ancestry of `folder_id`, then append `trailing` if set.
    Fetch {
        /// Folder whose ancestry forms the path.
        folder_id: FolderId,
        /// The selected file, appended after the ancestry.
        trailing: Option<Breadcrumb>,
    },
}

impl BreadcrumbPlan {
    /// Work out the path for `item`.
    ///
    /// A folder's ancestry already ends with the folder itself; a file's
    /// path is its folder's ancestry plus the file. Items without a
    /// resolvable parent are their own path.
    pub fn for_item(item: Option<&SelectedItem>) -> Self {
        match item {
            None => Self::Ready(Vec::new()),
            Some(SelectedItem::Folder(folder)) if folder.parent_id.is_none() => {
                Self::Ready(vec![Breadcrumb::from(folder)])
            }
            Some(SelectedItem::Folder(folder)) => Self::Fetch {
                folder_id: folder.id,
                trailing: None,
            },
            Some(SelectedItem::File(file)) => match file.folder_id {
                Some(folder_id) => Self::Fetch {
                    folder_id,
                    trailing: Some(Breadcrumb::from(file)),
                },
                None => Self::Ready(vec![Breadcrumb::from(file)]),
            },
        }
    }

    /// Build the final path from a fetched ancestry.
    pub fn resolve(trailing: Option<Breadcrumb>, ancestry: Vec<AncestryEntry>) -> Vec<Breadcrumb> {
        ancestry
            .into_iter()
            .map(Breadcrumb::from)
            .chain(trailing)
            .collect()
    }
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The folder highlighted in the tree (the open folder).
    pub fn folder(&self) -> Option<&Folder> {
        self.folder.as_ref()
    }

    /// The selected item.
    pub fn item(&self) -> Option<&SelectedItem> {
        self.item.as_ref()
    }

    /// Identity of the selected item.
    pub fn item_key(&self) -> Option<ItemKey> {
        self.item.as_ref().map(SelectedItem::key)
    }

    /// The breadcrumb path, root first.
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    /// Open `folder`: it becomes both the highlighted folder and the item.
    /// Returns whether the item's identity changed.
    pub(crate) fn open_folder(&mut self, folder: Folder) -> bool {
        self.folder = Some(folder.clone());
        self.set_item(SelectedItem::Folder(folder))
    }

    /// Select an item without changing the open folder.
    /// Returns whether the item's identity changed.
    pub(crate) fn set_item(&mut self, item: SelectedItem) -> bool {
        let changed = self.item_key() != Some(item.key());
        self.item = Some(item);
        changed
    }

    pub(crate) fn set_breadcrumbs(&mut self, path: Vec<Breadcrumb>) {
        self.breadcrumbs = path;
    }

    /// The selected file, when it is `file_id`.
    fn selected_file_mut(&mut self, file_id: FileId) -> Option<&mut File> {
        self.item
            .as_mut()
            .and_then(SelectedItem::as_file_mut)
            .filter(|f| f.id == file_id)
    }

    /// Refresh the selected file from the cached copy, if it is that file.
    pub(crate) fn refresh_file(&mut self, file: &File) -> bool {
        match self.selected_file_mut(file.id) {
            Some(selected) => {
                selected.metadata = file.metadata.clone();
                true
            }
            None => false,
        }
    }

    /// Append a created entry to the selected file, if it is the owner.
    pub(crate) fn append_metadata(&mut self, entry: &Metadata) -> bool {
        match self.selected_file_mut(entry.file_id) {
            Some(selected) => {
                selected.metadata.push(entry.clone());
                true
            }
            None => false,
        }
    }

    /// Replace an entry on the selected file, if it is the owner.
    pub(crate) fn replace_metadata(&mut self, entry: &Metadata) -> bool {
        let Some(selected) = self.selected_file_mut(entry.file_id) else {
            return false;
        };
        match selected.metadata.iter_mut().find(|m| m.id == entry.id) {
            Some(slot) => {
                *slot = entry.clone();
                true
            }
            None => false,
        }
    }

    /// Remove an entry from the selected file, wherever it is.
    pub(crate) fn remove_metadata(&mut self, id: MetadataId) -> bool {
        let Some(selected) = self.item.as_mut().and_then(SelectedItem::as_file_mut) else {
            return false;
        };
        let before = selected.metadata.len();
        selected.metadata.retain(|m| m.id != id);
        selected.metadata.len() != before
    }
}
