//! File domain entities.

pub mod metadata;
pub mod model;

pub use metadata::{Metadata, MetadataPatch, NewMetadata};
pub use model::File;
