//! Folder entity model.

use std::sync::Arc;

use filehub_core::types::FolderId;
use serde::{Deserialize, Serialize};

/// A folder in the remote hierarchy.
///
/// `children` stays `None` until the folder's children have been fetched.
/// Presence of the field, not emptiness, signals "already fetched". Child
/// nodes are reference-counted so that a tree rebuilt around one changed
/// node can share every untouched subtree with its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for top-level folders).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// Whether the server reports sub-folders for this folder.
    #[serde(default)]
    pub has_children: bool,
    /// Fetched child folders, absent until loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Arc<Folder>>>,
}

impl Folder {
    /// Create a folder with no fetched children.
    pub fn new(
        id: FolderId,
        name: impl Into<String>,
        parent_id: Option<FolderId>,
        has_children: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
            has_children,
            children: None,
        }
    }

    /// Check if this is a top-level folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this folder's children have been fetched at least once.
    pub fn has_fetched_children(&self) -> bool {
        self.children.is_some()
    }

    /// Return a copy of this node with `children` replaced.
    pub fn with_children(&self, children: Vec<Arc<Folder>>) -> Self {
        Self {
            children: Some(children),
            ..self.without_children()
        }
    }

    /// Return a copy of this node carrying no fetched children.
    pub fn without_children(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            parent_id: self.parent_id,
            has_children: self.has_children,
            children: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_absent_until_fetched() {
        let folder: Folder =
            serde_json::from_str(r#"{"id": 3, "name": "sub", "parent_id": 1, "has_children": true}"#)
                .expect("decode");
        assert!(!folder.has_fetched_children());
        assert!(!folder.is_root());

        let fetched = folder.with_children(Vec::new());
        assert!(fetched.has_fetched_children());
        assert_eq!(fetched.children.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn test_null_parent_is_root() {
        let folder: Folder =
            serde_json::from_str(r#"{"id": 1, "name": "root", "parent_id": null}"#).expect("decode");
        assert!(folder.is_root());
        assert!(!folder.has_children);
    }
}
