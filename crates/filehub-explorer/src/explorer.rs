//! The explorer state container and its navigation operations.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use filehub_client::ExplorerApi;
use filehub_core::error::AppError;
use filehub_core::result::AppResult;
use filehub_core::types::FolderId;
use filehub_entity::folder::Folder;
use filehub_entity::navigation::{Breadcrumb, ContentItem};

use crate::contents::ContentsCache;
use crate::requests::{RequestKey, RequestTracker};
use crate::selection::{BreadcrumbPlan, Selection};
use crate::tree::TreeStore;

/// Everything the explorer shows, as one value.
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    pub(crate) tree: TreeStore,
    pub(crate) contents: ContentsCache,
    pub(crate) selection: Selection,
    pub(crate) requests: RequestTracker,
}

impl ExplorerState {
    /// The folder tree.
    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    /// The open folder's contents.
    pub fn contents(&self) -> &ContentsCache {
        &self.contents
    }

    /// The selected folder, item, and breadcrumb path.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Latest request generations.
    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }
}

/// Shared explorer over a remote folder hierarchy.
///
/// Operations take `&self` and may overlap. State is only touched under the
/// lock between gateway calls; each response is applied only if its request
/// is still the latest for what it would overwrite.
#[derive(Debug)]
pub struct Explorer {
    api: Arc<dyn ExplorerApi>,
    state: RwLock<ExplorerState>,
}

impl Explorer {
    /// Create an explorer with empty state.
    pub fn new(api: Arc<dyn ExplorerApi>) -> Self {
        Self {
            api,
            state: RwLock::new(ExplorerState::default()),
        }
    }

    pub(crate) fn api(&self) -> &dyn ExplorerApi {
        self.api.as_ref()
    }

    pub(crate) fn state(&self) -> &RwLock<ExplorerState> {
        &self.state
    }

    /// A point-in-time copy of the whole state. Tree nodes are shared.
    pub async fn snapshot(&self) -> ExplorerState {
        self.state.read().await.clone()
    }

    /// Run `f` against the current state without copying it.
    pub async fn read<R>(&self, f: impl FnOnce(&ExplorerState) -> R) -> R {
        f(&*self.state.read().await)
    }

    /// Fetch the top-level folders and replace the tree's roots.
    pub async fn load_top_level(&self) -> AppResult<()> {
        let ticket = {
            let mut state = self.state.write().await;
            state.tree.set_initial_loading(true);
            state.requests.issue(RequestKey::TopLevel)
        };

        let result = self.api.fetch_folders(None).await;

        let mut state = self.state.write().await;
        if !state.requests.is_current(&ticket) {
            warn!("Discarding superseded top-level listing");
            return Ok(());
        }
        state.tree.set_initial_loading(false);
        match result {
            Ok(folders) => {
                debug!(count = folders.len(), "Loaded top-level folders");
                state.tree.replace_top_level(folders);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load top-level folders");
                Err(e)
            }
        }
    }

    /// Expand or collapse folder `id`.
    ///
    /// An expanded folder collapses unless `force_open` is set. Expanding
    /// always refetches the children and merges them wherever the folder
    /// sits in the tree.
    pub async fn toggle(&self, id: FolderId, force_open: bool) -> AppResult<()> {
        let key = RequestKey::Children(id);
        let ticket = {
            let mut state = self.state.write().await;
            if state.tree.is_expanded(id) && !force_open {
                state.tree.collapse(id);
                debug!(folder_id = %id, "Collapsed folder");
                return Ok(());
            }
            state.tree.expand(id);
            state.tree.begin_loading(id);
            state.requests.issue(key)
        };

        let result = self.api.fetch_folders(Some(id)).await;

        let mut state = self.state.write().await;
        if !state.requests.is_current(&ticket) {
            warn!(folder_id = %id, "Discarding superseded children listing");
            return Ok(());
        }
        state.tree.finish_loading(id);
        match result {
            Ok(children) => {
                let count = children.len();
                if state.tree.merge_children(id, children) {
                    debug!(folder_id = %id, count, "Merged children");
                } else {
                    warn!(folder_id = %id, "Fetched children for a folder not in the tree");
                }
                Ok(())
            }
            Err(e) => {
                error!(folder_id = %id, error = %e, "Failed to load children");
                Err(e)
            }
        }
    }

    /// Open `folder`: expand it, make it the selected folder and item, and
    /// load its contents.
    pub async fn select_folder(&self, folder: Folder) -> AppResult<()> {
        let id = folder.id;
        let changed = self.state.write().await.selection.open_folder(folder);
        debug!(folder_id = %id, "Selected folder");

        let breadcrumbs = async {
            if changed {
                self.refresh_breadcrumbs().await
            } else {
                Ok(())
            }
        };
        let (expanded, loaded, crumbs) =
            tokio::join!(self.toggle(id, true), self.load_contents(id), breadcrumbs);
        expanded.and(loaded).and(crumbs)
    }

    /// Open a folder reached from somewhere other than the tree, expanding
    /// its ancestors first so it is visible.
    ///
    /// A failed ancestry lookup is logged and the folder is opened anyway.
    pub async fn open_from_descendant(&self, folder: Folder) -> AppResult<()> {
        match self.api.fetch_ancestry(Some(folder.id)).await {
            Ok(ancestry) => {
                let ancestors: Vec<FolderId> = ancestry
                    .iter()
                    .map(|entry| entry.id)
                    .filter(|id| *id != folder.id)
                    .collect();
                self.state
                    .write()
                    .await
                    .tree
                    .reveal(ancestors.iter().copied());

                // Root first, so each level exists before its children merge.
                for id in ancestors {
                    let fetched = self
                        .state
                        .read()
                        .await
                        .tree
                        .find(id)
                        .is_some_and(|node| node.has_fetched_children());
                    if !fetched {
                        if let Err(e) = self.toggle(id, true).await {
                            warn!(folder_id = %id, error = %e, "Failed to materialize ancestor");
                        }
                    }
                }
            }
            Err(e) => {
                error!(folder_id = %folder.id, error = %e, "Failed to fetch ancestry");
            }
        }
        self.select_folder(folder).await
    }

    /// Select an entry of the open folder's contents.
    pub async fn select_item(&self, item: ContentItem) -> AppResult<()> {
        let changed = self.state.write().await.selection.set_item(item.into());
        if changed {
            self.refresh_breadcrumbs().await
        } else {
            Ok(())
        }
    }

    /// Navigate to breadcrumb `index`. Only entries before the last are
    /// navigable.
    pub async fn open_breadcrumb(&self, index: usize) -> AppResult<()> {
        let folder = {
            let state = self.state.read().await;
            let path = state.selection.breadcrumbs();
            if index >= path.len().saturating_sub(1) {
                return Err(AppError::validation(format!(
                    "Breadcrumb {index} is not navigable ({} entries)",
                    path.len()
                )));
            }
            let Breadcrumb::Folder { id, name } = &path[index] else {
                return Err(AppError::validation(format!(
                    "Breadcrumb {index} is not a folder"
                )));
            };
            match state.tree.find(*id) {
                Some(node) => node.without_children(),
                None => {
                    let parent = index
                        .checked_sub(1)
                        .and_then(|i| path[i].folder_id());
                    Folder::new(*id, name.clone(), parent, true)
                }
            }
        };
        self.select_folder(folder).await
    }

    /// Load the contents of `folder_id` into the single contents slot.
    pub async fn load_contents(&self, folder_id: FolderId) -> AppResult<()> {
        let ticket = {
            let mut state = self.state.write().await;
            state.contents.begin(folder_id);
            state.requests.issue(RequestKey::Contents)
        };

        let result = self.api.fetch_folder_contents(folder_id).await;

        let mut state = self.state.write().await;
        if !state.requests.is_current(&ticket) {
            warn!(folder_id = %folder_id, "Discarding superseded folder contents");
            return Ok(());
        }
        match result {
            Ok(contents) => {
                debug!(folder_id = %folder_id, items = contents.len(), "Loaded folder contents");
                state.contents.finish(contents);
                Ok(())
            }
            Err(e) => {
                error!(folder_id = %folder_id, error = %e, "Failed to load folder contents");
                state.contents.fail();
                Err(e)
            }
        }
    }

    /// Recompute the breadcrumb path for the selected item.
    ///
    /// On a failed ancestry fetch the previous path is kept.
    pub async fn refresh_breadcrumbs(&self) -> AppResult<()> {
        let (ticket, plan) = {
            let mut state = self.state.write().await;
            let plan = BreadcrumbPlan::for_item(state.selection.item());
            let ticket = state.requests.issue(RequestKey::Breadcrumb);
            match plan {
                BreadcrumbPlan::Ready(path) => {
                    state.selection.set_breadcrumbs(path);
                    return Ok(());
                }
                BreadcrumbPlan::Fetch { folder_id, trailing } => (ticket, (folder_id, trailing)),
            }
        };
        let (folder_id, trailing) = plan;

        let result = self.api.fetch_ancestry(Some(folder_id)).await;

        let mut state = self.state.write().await;
        if !state.requests.is_current(&ticket) {
            warn!(folder_id = %folder_id, "Discarding superseded breadcrumb path");
            return Ok(());
        }
        match result {
            Ok(ancestry) => {
                state
                    .selection
                    .set_breadcrumbs(BreadcrumbPlan::resolve(trailing, ancestry));
                Ok(())
            }
            Err(e) => {
                error!(folder_id = %folder_id, error = %e, "Failed to fetch breadcrumb path");
                Err(e)
            }
        }
    }
}
