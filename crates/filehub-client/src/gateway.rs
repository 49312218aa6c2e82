//! The gateway trait implemented by every API backend.

use async_trait::async_trait;

use filehub_core::result::AppResult;
use filehub_core::types::{FileId, FolderId, MetadataId};
use filehub_entity::file::{Metadata, MetadataPatch, NewMetadata};
use filehub_entity::folder::{Folder, FolderContents};
use filehub_entity::navigation::AncestryEntry;

/// Calls the explorer issues against the FileHub REST API.
///
/// Every method is a suspend point. Implementations do not retry and do not
/// distinguish 4xx from 5xx: any failure is reported as a network error and
/// the caller decides how to surface it.
#[async_trait]
pub trait ExplorerApi: Send + Sync + std::fmt::Debug + 'static {
    /// List the children of `parent`, or the top-level folders when `None`.
    async fn fetch_folders(&self, parent: Option<FolderId>) -> AppResult<Vec<Folder>>;

    /// List the direct sub-folders and files of a folder.
    async fn fetch_folder_contents(&self, folder_id: FolderId) -> AppResult<FolderContents>;

    /// Root-to-folder path, inclusive of the folder itself.
    ///
    /// `None` resolves to an empty path without touching the network.
    async fn fetch_ancestry(&self, folder_id: Option<FolderId>) -> AppResult<Vec<AncestryEntry>>;

    /// Attach a new metadata entry to a file; returns the created record.
    async fn add_metadata(&self, file_id: FileId, data: &NewMetadata) -> AppResult<Metadata>;

    /// Change the value of a metadata entry; returns the full updated record.
    async fn update_metadata(
        &self,
        metadata_id: MetadataId,
        patch: &MetadataPatch,
    ) -> AppResult<Metadata>;

    /// Delete a metadata entry.
    async fn delete_metadata(&self, metadata_id: MetadataId) -> AppResult<()>;
}
