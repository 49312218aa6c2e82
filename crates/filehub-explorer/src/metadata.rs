//! Metadata editing with reconciliation into the cached contents and the
//! selected file.
//!
//! The server is called first; local state only changes from its response.

use tracing::{debug, error, info};

use filehub_core::error::AppError;
use filehub_core::result::AppResult;
use filehub_core::types::{FileId, MetadataId};
use filehub_entity::file::{Metadata, MetadataPatch, NewMetadata};

use crate::explorer::{Explorer, ExplorerState};

/// Asks the user before a destructive change.
pub trait Confirmation: Send + Sync {
    /// Return `true` to proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything. For non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

impl Explorer {
    /// Create a metadata entry on `file_id`.
    pub async fn add_metadata(&self, file_id: FileId, data: NewMetadata) -> AppResult<Metadata> {
        if data.key.trim().is_empty() || data.value.trim().is_empty() {
            return Err(AppError::validation("Metadata key and value are required"));
        }

        let entry = self
            .api()
            .add_metadata(file_id, &data)
            .await
            .inspect_err(|e| error!(file_id = %file_id, error = %e, "Failed to add metadata"))?;

        let mut state = self.state().write().await;
        let ExplorerState {
            contents,
            selection,
            ..
        } = &mut *state;
        match contents.append_metadata(file_id, entry.clone()) {
            Some(file) => {
                selection.refresh_file(file);
            }
            None => {
                selection.append_metadata(&entry);
            }
        }
        info!(file_id = %file_id, metadata_id = %entry.id, key = %entry.key, "Metadata added");
        Ok(entry)
    }

    /// Change the value of entry `metadata_id`. The key never changes.
    pub async fn update_metadata(
        &self,
        metadata_id: MetadataId,
        patch: MetadataPatch,
    ) -> AppResult<Metadata> {
        let entry = self
            .api()
            .update_metadata(metadata_id, &patch)
            .await
            .inspect_err(|e| {
                error!(metadata_id = %metadata_id, error = %e, "Failed to update metadata")
            })?;

        let mut state = self.state().write().await;
        let ExplorerState {
            contents,
            selection,
            ..
        } = &mut *state;
        match contents.replace_metadata(entry.clone()) {
            Some(file) => {
                selection.refresh_file(file);
            }
            None => {
                selection.replace_metadata(&entry);
            }
        }
        info!(file_id = %entry.file_id, metadata_id = %entry.id, "Metadata updated");
        Ok(entry)
    }

    /// Delete entry `metadata_id` once `confirm` agrees.
    ///
    /// Returns `false` when the confirmation is declined; nothing is sent.
    pub async fn delete_metadata(
        &self,
        metadata_id: MetadataId,
        confirm: &dyn Confirmation,
    ) -> AppResult<bool> {
        let prompt = self
            .read(|state| {
                state
                    .contents()
                    .owner_of(metadata_id)
                    .and_then(|file| file.metadata.iter().find(|m| m.id == metadata_id))
                    .map(|m| format!("Delete metadata '{}' from this file?", m.key))
            })
            .await
            .unwrap_or_else(|| format!("Delete metadata entry {metadata_id}?"));

        if !confirm.confirm(&prompt) {
            debug!(metadata_id = %metadata_id, "Metadata deletion declined");
            return Ok(false);
        }

        self.api()
            .delete_metadata(metadata_id)
            .await
            .inspect_err(|e| {
                error!(metadata_id = %metadata_id, error = %e, "Failed to delete metadata")
            })?;

        let mut state = self.state().write().await;
        let owner = state.contents.remove_metadata(metadata_id);
        state.selection.remove_metadata(metadata_id);
        info!(metadata_id = %metadata_id, file_id = ?owner, "Metadata deleted");
        Ok(true)
    }
}
