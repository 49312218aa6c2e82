//! # filehub-core
//!
//! Core crate for the FileHub explorer. Contains configuration schemas,
//! typed identifiers, the API response envelope, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other FileHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
