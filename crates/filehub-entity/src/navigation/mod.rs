//! Selection and breadcrumb value objects.

pub mod breadcrumb;
pub mod item;

pub use breadcrumb::{AncestryEntry, Breadcrumb};
pub use item::{ContentItem, ItemKey, SelectedItem};
