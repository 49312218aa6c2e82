//! The lazily materialized folder tree.
//!
//! Only top-level folders are held directly; deeper levels live inside each
//! node's `children`, which stay `None` until fetched. Merging fetched
//! children rebuilds only the nodes on the path from the root to the target;
//! every other node keeps its `Arc`, so consumers can skip unchanged
//! subtrees with a pointer comparison.

use std::collections::HashSet;
use std::sync::Arc;

use filehub_core::types::FolderId;
use filehub_entity::folder::Folder;

/// Tree state: folders, expansion set, and per-folder loading flags.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    /// Top-level folders.
    folders: Vec<Arc<Folder>>,
    /// Folders currently expanded in the view.
    expanded: HashSet<FolderId>,
    /// Folders whose children are being fetched.
    loading: HashSet<FolderId>,
    /// True while the top-level listing is in flight.
    initial_loading: bool,
}

/// One visible line of the rendered tree.
#[derive(Debug, Clone)]
pub struct TreeRow {
    /// Nesting level (0 for top-level folders).
    pub depth: usize,
    /// The folder on this line.
    pub folder: Arc<Folder>,
    /// Whether the folder is expanded.
    pub expanded: bool,
    /// Whether the folder's children are loading.
    pub loading: bool,
}

impl TreeStore {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level folders.
    pub fn folders(&self) -> &[Arc<Folder>] {
        &self.folders
    }

    /// Replace the top-level folders wholesale.
    pub fn replace_top_level(&mut self, folders: Vec<Folder>) {
        self.folders = folders.into_iter().map(Arc::new).collect();
    }

    /// Whether the top-level listing is still loading.
    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub(crate) fn set_initial_loading(&mut self, loading: bool) {
        self.initial_loading = loading;
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: FolderId) -> bool {
        self.expanded.contains(&id)
    }

    /// Whether `id` has a children fetch in flight.
    pub fn is_loading(&self, id: FolderId) -> bool {
        self.loading.contains(&id)
    }

    /// All expanded folder ids.
    pub fn expanded(&self) -> &HashSet<FolderId> {
        &self.expanded
    }

    /// All folder ids with a children fetch in flight.
    pub fn loading(&self) -> &HashSet<FolderId> {
        &self.loading
    }

    /// Mark a folder expanded.
    pub fn expand(&mut self, id: FolderId) {
        self.expanded.insert(id);
    }

    /// Collapse a folder. Fetched children stay cached.
    pub fn collapse(&mut self, id: FolderId) -> bool {
        self.expanded.remove(&id)
    }

    /// Expand every folder in `ids`.
    pub fn reveal(&mut self, ids: impl IntoIterator<Item = FolderId>) {
        self.expanded.extend(ids);
    }

    pub(crate) fn begin_loading(&mut self, id: FolderId) {
        self.loading.insert(id);
    }

    pub(crate) fn finish_loading(&mut self, id: FolderId) {
        self.loading.remove(&id);
    }

    /// Find a folder anywhere in the materialized tree.
    pub fn find(&self, id: FolderId) -> Option<&Arc<Folder>> {
        find_folder(&self.folders, id)
    }

    /// Replace the children of folder `id`. Returns `false` when the folder
    /// is not part of the materialized tree, leaving the tree unchanged.
    pub fn merge_children(&mut self, id: FolderId, children: Vec<Folder>) -> bool {
        let children = children.into_iter().map(Arc::new).collect();
        match merge_children(&self.folders, id, children) {
            Some(folders) => {
                self.folders = folders;
                true
            }
            None => false,
        }
    }

    /// Flatten the tree into the rows a view would draw: every top-level
    /// folder, plus the fetched children of expanded folders, depth first.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.collect_rows(&self.folders, 0, &mut rows);
        rows
    }

    fn collect_rows(&self, nodes: &[Arc<Folder>], depth: usize, rows: &mut Vec<TreeRow>) {
        for node in nodes {
            let expanded = self.is_expanded(node.id);
            rows.push(TreeRow {
                depth,
                folder: Arc::clone(node),
                expanded,
                loading: self.is_loading(node.id),
            });
            if expanded {
                if let Some(children) = &node.children {
                    self.collect_rows(children, depth + 1, rows);
                }
            }
        }
    }
}

/// Depth-first search for a folder by id.
pub fn find_folder(nodes: &[Arc<Folder>], id: FolderId) -> Option<&Arc<Folder>> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = node.children.as_deref().and_then(|c| find_folder(c, id)) {
            return Some(found);
        }
    }
    None
}

/// Return a new tree in which folder `id` has `children`, or `None` if no
/// such folder is materialized.
///
/// Only the ancestors of the match and the match itself are new nodes;
/// everything else is shared with `nodes`.
pub fn merge_children(
    nodes: &[Arc<Folder>],
    id: FolderId,
    children: Vec<Arc<Folder>>,
) -> Option<Vec<Arc<Folder>>> {
    let path = path_to(nodes, id)?;
    Some(rebuild(nodes, &path, children))
}

/// Sibling indices from the top level down to folder `id`.
fn path_to(nodes: &[Arc<Folder>], id: FolderId) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(vec![index]);
        }
        if let Some(children) = &node.children {
            if let Some(mut rest) = path_to(children, id) {
                rest.insert(0, index);
                return Some(rest);
            }
        }
    }
    None
}

fn rebuild(level: &[Arc<Folder>], path: &[usize], children: Vec<Arc<Folder>>) -> Vec<Arc<Folder>> {
    let Some((&index, rest)) = path.split_first() else {
        return level.to_vec();
    };

    let mut nodes = level.to_vec();
    let node = &level[index];
    let replaced = if rest.is_empty() {
        node.with_children(children)
    } else {
        let current = node.children.as_deref().unwrap_or_default();
        node.with_children(rebuild(current, rest, children))
    };
    nodes[index] = Arc::new(replaced);
    nodes
}
