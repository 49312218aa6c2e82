//! # filehub-explorer
//!
//! Client-side state for browsing a FileHub folder hierarchy.
//!
//! [`Explorer`] is the single state container owned by a front end. It holds
//! a partially materialized folder tree (children are fetched when a folder
//! is expanded), the contents of the currently open folder, the selected
//! item with its breadcrumb path, and reconciles metadata edits back into
//! all of them once the server has confirmed each change.
//!
//! All state changes happen under a short-lived lock that is never held
//! across a network call, so overlapping operations are allowed. Every
//! response is matched against a per-key generation counter and discarded
//! when a newer request for the same key has been issued since.

pub mod contents;
pub mod explorer;
pub mod metadata;
pub mod requests;
pub mod selection;
pub mod tree;

pub use contents::ContentsCache;
pub use explorer::{Explorer, ExplorerState};
pub use metadata::{AlwaysConfirm, Confirmation};
pub use requests::{RequestKey, RequestTracker, Ticket};
pub use selection::{BreadcrumbPlan, Selection};
pub use tree::{TreeRow, TreeStore};
