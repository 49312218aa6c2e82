//! Core type definitions used across the FileHub explorer workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::{ApiErrorResponse, Envelope};
