//! Shared test helpers: an in-memory, scriptable `ExplorerApi`.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use filehub_client::ExplorerApi;
use filehub_core::error::AppError;
use filehub_core::result::AppResult;
use filehub_core::types::{FileId, FolderId, MetadataId};
use filehub_entity::file::{File, Metadata, MetadataPatch, NewMetadata};
use filehub_entity::folder::{Folder, FolderContents};
use filehub_entity::navigation::AncestryEntry;
use filehub_explorer::Explorer;

/// A gateway call as seen by the fake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Folders(Option<FolderId>),
    Contents(FolderId),
    Ancestry(Option<FolderId>),
    AddMetadata(FileId),
    UpdateMetadata(MetadataId),
    DeleteMetadata(MetadataId),
}

#[derive(Debug, Default)]
struct Inner {
    folders: HashMap<Option<FolderId>, Vec<Folder>>,
    contents: HashMap<FolderId, FolderContents>,
    ancestry: HashMap<FolderId, Vec<AncestryEntry>>,
    metadata: HashMap<MetadataId, Metadata>,
    next_metadata_id: i64,
    failing: HashSet<Call>,
    gates: HashMap<Call, VecDeque<Arc<Notify>>>,
    calls: Vec<Call>,
}

/// Scripted gateway. Each response is captured when the call is made; a
/// gated call then waits for its gate before returning it.
#[derive(Debug, Default)]
pub struct FakeApi {
    inner: Mutex<Inner>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_folders(&self, parent: Option<FolderId>, folders: Vec<Folder>) {
        self.inner.lock().expect("lock").folders.insert(parent, folders);
    }

    pub fn set_contents(&self, folder: FolderId, contents: FolderContents) {
        let mut inner = self.inner.lock().expect("lock");
        for file in &contents.files {
            for entry in &file.metadata {
                inner.metadata.insert(entry.id, entry.clone());
                inner.next_metadata_id = inner.next_metadata_id.max(entry.id.get());
            }
        }
        inner.contents.insert(folder, contents);
    }

    pub fn set_ancestry(&self, folder: FolderId, path: Vec<AncestryEntry>) {
        self.inner.lock().expect("lock").ancestry.insert(folder, path);
    }

    /// Make every future `call` fail with a network error.
    pub fn fail(&self, call: Call) {
        self.inner.lock().expect("lock").failing.insert(call);
    }

    pub fn recover(&self, call: Call) {
        self.inner.lock().expect("lock").failing.remove(&call);
    }

    /// Hold the next `call` until the returned gate is notified.
    pub fn gate(&self, call: Call) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.inner
            .lock()
            .expect("lock")
            .gates
            .entry(call)
            .or_default()
            .push_back(Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().expect("lock").calls.clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }

    /// Record the call, capture its response, then wait on its gate if any.
    async fn respond<T>(
        &self,
        call: Call,
        produce: impl FnOnce(&mut Inner) -> AppResult<T>,
    ) -> AppResult<T> {
        let (result, gate) = {
            let mut inner = self.inner.lock().expect("lock");
            inner.calls.push(call);
            let gate = inner.gates.get_mut(&call).and_then(VecDeque::pop_front);
            let result = if inner.failing.contains(&call) {
                Err(AppError::network("HTTP error! status: 500 Internal Server Error"))
            } else {
                produce(&mut *inner)
            };
            (result, gate)
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        result
    }
}

fn not_found() -> AppError {
    AppError::network("HTTP error! status: 404 Not Found")
}

#[async_trait]
impl ExplorerApi for FakeApi {
    async fn fetch_folders(&self, parent: Option<FolderId>) -> AppResult<Vec<Folder>> {
        self.respond(Call::Folders(parent), |inner| {
            Ok(inner.folders.get(&parent).cloned().unwrap_or_default())
        })
        .await
    }

    async fn fetch_folder_contents(&self, folder_id: FolderId) -> AppResult<FolderContents> {
        self.respond(Call::Contents(folder_id), |inner| {
            inner.contents.get(&folder_id).cloned().ok_or_else(not_found)
        })
        .await
    }

    async fn fetch_ancestry(&self, folder_id: Option<FolderId>) -> AppResult<Vec<AncestryEntry>> {
        let Some(id) = folder_id else {
            return Ok(Vec::new());
        };
        self.respond(Call::Ancestry(folder_id), |inner| {
            inner.ancestry.get(&id).cloned().ok_or_else(not_found)
        })
        .await
    }

    async fn add_metadata(&self, file_id: FileId, data: &NewMetadata) -> AppResult<Metadata> {
        self.respond(Call::AddMetadata(file_id), |inner| {
            inner.next_metadata_id += 1;
            let entry = Metadata {
                id: MetadataId(inner.next_metadata_id),
                file_id,
                key: data.key.clone(),
                value: data.value.clone(),
            };
            inner.metadata.insert(entry.id, entry.clone());
            Ok(entry)
        })
        .await
    }

    async fn update_metadata(
        &self,
        metadata_id: MetadataId,
        patch: &MetadataPatch,
    ) -> AppResult<Metadata> {
        self.respond(Call::UpdateMetadata(metadata_id), |inner| {
            let entry = inner.metadata.get_mut(&metadata_id).ok_or_else(not_found)?;
            entry.value = patch.value.clone();
            Ok(entry.clone())
        })
        .await
    }

    async fn delete_metadata(&self, metadata_id: MetadataId) -> AppResult<()> {
        self.respond(Call::DeleteMetadata(metadata_id), |inner| {
            inner
                .metadata
                .remove(&metadata_id)
                .map(|_| ())
                .ok_or_else(not_found)
        })
        .await
    }
}

pub fn explorer(api: &Arc<FakeApi>) -> Explorer {
    Explorer::new(Arc::clone(api) as Arc<dyn ExplorerApi>)
}

pub fn folder(id: i64, name: &str, parent: Option<i64>, has_children: bool) -> Folder {
    Folder::new(FolderId(id), name, parent.map(FolderId), has_children)
}

pub fn file(id: i64, name: &str, folder: Option<i64>, metadata: Vec<Metadata>) -> File {
    File {
        id: FileId(id),
        filename: name.to_string(),
        size: Some(1536),
        folder_id: folder.map(FolderId),
        metadata,
    }
}

pub fn meta(id: i64, file: i64, key: &str, value: &str) -> Metadata {
    Metadata {
        id: MetadataId(id),
        file_id: FileId(file),
        key: key.to_string(),
        value: value.to_string(),
    }
}

pub fn crumb(id: i64, name: &str) -> AncestryEntry {
    AncestryEntry {
        id: FolderId(id),
        name: name.to_string(),
    }
}

/// Hierarchy used across tests:
///
/// ```text
/// root(1)
///   docs(2)
///     reports(4)
///       a.txt(7)  [Author=Jane(99)]
///       b.json(8)
///   media(3)
/// archive(6)
/// ```
pub fn seeded() -> Arc<FakeApi> {
    let api = FakeApi::new();
    api.set_folders(
        None,
        vec![folder(1, "root", None, true), folder(6, "archive", None, false)],
    );
    api.set_folders(
        Some(FolderId(1)),
        vec![folder(2, "docs", Some(1), true), folder(3, "media", Some(1), false)],
    );
    api.set_folders(Some(FolderId(2)), vec![folder(4, "reports", Some(2), false)]);
    api.set_folders(Some(FolderId(3)), Vec::new());
    api.set_folders(Some(FolderId(4)), Vec::new());
    api.set_folders(Some(FolderId(6)), Vec::new());

    api.set_contents(
        FolderId(1),
        FolderContents {
            folders: vec![folder(2, "docs", Some(1), true), folder(3, "media", Some(1), false)],
            files: Vec::new(),
        },
    );
    api.set_contents(
        FolderId(2),
        FolderContents {
            folders: vec![folder(4, "reports", Some(2), false)],
            files: Vec::new(),
        },
    );
    api.set_contents(FolderId(3), FolderContents::default());
    api.set_contents(FolderId(6), FolderContents::default());
    api.set_contents(
        FolderId(4),
        FolderContents {
            folders: Vec::new(),
            files: vec![
                file(7, "a.txt", Some(4), vec![meta(99, 7, "Author", "Jane")]),
                file(8, "b.json", Some(4), Vec::new()),
            ],
        },
    );

    api.set_ancestry(FolderId(1), vec![crumb(1, "root")]);
    api.set_ancestry(FolderId(2), vec![crumb(1, "root"), crumb(2, "docs")]);
    api.set_ancestry(FolderId(3), vec![crumb(1, "root"), crumb(3, "media")]);
    api.set_ancestry(
        FolderId(4),
        vec![crumb(1, "root"), crumb(2, "docs"), crumb(4, "reports")],
    );
    api.set_ancestry(FolderId(6), vec![crumb(6, "archive")]);
    api
}
