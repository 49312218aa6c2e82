//! # filehub-client
//!
//! Remote data gateway for the FileHub explorer. [`ExplorerApi`] describes
//! every call the explorer makes against the REST API;
//! [`HttpExplorerClient`] implements it with `reqwest`, unwrapping
//! `{ "data": ... }` envelopes and mapping transport failures and non-2xx
//! statuses to [`filehub_core::error::ErrorKind::Network`].

pub mod gateway;
pub mod http;

pub use gateway::ExplorerApi;
pub use http::HttpExplorerClient;
