//! # filehub-entity
//!
//! Domain entity models for the FileHub explorer. Every struct in this crate
//! mirrors a payload of the FileHub REST API or a value object derived from
//! one. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod file;
pub mod folder;
pub mod navigation;
