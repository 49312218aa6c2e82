//! Integration tests for folder selection, contents loading, and breadcrumbs.

mod helpers;

use filehub_core::error::ErrorKind;
use filehub_core::types::{FileId, FolderId};
use filehub_entity::folder::FolderContents;
use filehub_entity::navigation::{Breadcrumb, ContentItem, ItemKey};
use filehub_explorer::ExplorerState;

use helpers::{Call, file, folder};

fn labels(state: &ExplorerState) -> Vec<String> {
    state
        .selection()
        .breadcrumbs()
        .iter()
        .map(|b| b.label().to_string())
        .collect()
}

#[tokio::test]
async fn test_select_folder_loads_contents_and_path() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    explorer.load_top_level().await.expect("load");

    explorer
        .select_folder(folder(2, "docs", Some(1), true))
        .await
        .expect("select");

    let state = explorer.snapshot().await;
    assert_eq!(state.selection().folder().map(|f| f.id), Some(FolderId(2)));
    assert_eq!(
        state.selection().item_key(),
        Some(ItemKey::Folder(FolderId(2)))
    );
    assert!(state.tree().is_expanded(FolderId(2)));
    assert_eq!(state.contents().folder_id(), Some(FolderId(2)));
    assert!(!state.contents().is_loading());
    assert_eq!(
        state.contents().data().map(|c| c.folders.len()),
        Some(1)
    );
    assert_eq!(labels(&state), vec!["root", "docs"]);
}

#[tokio::test]
async fn test_root_folder_path_needs_no_request() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    explorer.load_top_level().await.expect("load");

    explorer
        .select_folder(folder(6, "archive", None, false))
        .await
        .expect("select");

    let state = explorer.snapshot().await;
    assert_eq!(labels(&state), vec!["archive"]);
    assert_eq!(api.count(Call::Ancestry(Some(FolderId(6)))), 0);
}

#[tokio::test]
async fn test_file_path_is_folder_ancestry_plus_file() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    explorer
        .select_folder(folder(4, "reports", Some(2), false))
        .await
        .expect("open folder");

    let item = explorer
        .read(|s| s.contents().data().and_then(|c| c.items().last()))
        .await
        .expect("b.json in contents");
    explorer.select_item(item).await.expect("select file");

    let state = explorer.snapshot().await;
    assert_eq!(labels(&state), vec!["root", "docs", "reports", "b.json"]);
    assert!(matches!(
        state.selection().breadcrumbs().last(),
        Some(Breadcrumb::File { id, .. }) if *id == FileId(8)
    ));
    // Selecting a file keeps the open folder.
    assert_eq!(state.selection().folder().map(|f| f.id), Some(FolderId(4)));
}

#[tokio::test]
async fn test_reselecting_same_item_skips_path_refresh() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    let item = ContentItem::File(file(7, "a.txt", Some(4), Vec::new()));

    explorer.select_item(item.clone()).await.expect("first");
    explorer.select_item(item).await.expect("second");

    assert_eq!(api.count(Call::Ancestry(Some(FolderId(4)))), 1);
}

#[tokio::test]
async fn test_orphan_file_is_its_own_path() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);

    explorer
        .select_item(ContentItem::File(file(50, "loose.bin", None, Vec::new())))
        .await
        .expect("select");

    let state = explorer.snapshot().await;
    assert_eq!(labels(&state), vec!["loose.bin"]);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_newer_contents_load_supersedes_older() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    let gate = api.gate(Call::Contents(FolderId(2)));

    let (first, second) = tokio::join!(explorer.load_contents(FolderId(2)), async {
        let second = explorer.load_contents(FolderId(3)).await;
        gate.notify_one();
        second
    });
    first.expect("first");
    second.expect("second");

    let state = explorer.snapshot().await;
    assert_eq!(state.contents().folder_id(), Some(FolderId(3)));
    assert!(state.contents().data().is_some_and(FolderContents::is_empty));
    assert!(!state.contents().is_loading());
}

#[tokio::test]
async fn test_contents_in_flight_is_not_empty() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    let gate = api.gate(Call::Contents(FolderId(4)));

    let (loaded, (in_flight, loading)) = tokio::join!(explorer.load_contents(FolderId(4)), async {
        let observed = explorer
            .read(|s| (s.contents().data().is_none(), s.contents().is_loading()))
            .await;
        gate.notify_one();
        observed
    });
    loaded.expect("load");

    assert!(in_flight);
    assert!(loading);
    assert!(!explorer.snapshot().await.contents().is_loading());
}

#[tokio::test]
async fn test_failed_contents_load_clears_flag() {
    let api = helpers::seeded();
    api.fail(Call::Contents(FolderId(2)));
    let explorer = helpers::explorer(&api);

    let err = explorer.load_contents(FolderId(2)).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Network);
    let state = explorer.snapshot().await;
    assert!(!state.contents().is_loading());
    assert!(state.contents().data().is_none());
}

#[tokio::test]
async fn test_failed_path_keeps_previous_breadcrumbs() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    explorer
        .select_folder(folder(2, "docs", Some(1), true))
        .await
        .expect("select");
    api.fail(Call::Ancestry(Some(FolderId(3))));

    let result = explorer
        .select_folder(folder(3, "media", Some(1), false))
        .await;

    assert!(result.is_err());
    let state = explorer.snapshot().await;
    assert_eq!(labels(&state), vec!["root", "docs"]);
    assert_eq!(state.selection().folder().map(|f| f.id), Some(FolderId(3)));
}

#[tokio::test]
async fn test_open_breadcrumb_navigates_to_ancestor() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    explorer.load_top_level().await.expect("load");
    explorer
        .open_from_descendant(folder(4, "reports", Some(2), false))
        .await
        .expect("open");

    explorer.open_breadcrumb(1).await.expect("open docs");

    let state = explorer.snapshot().await;
    let selected = state.selection().folder().expect("selected folder");
    assert_eq!(selected.id, FolderId(2));
    assert_eq!(selected.parent_id, Some(FolderId(1)));
    assert!(selected.children.is_none());
    assert_eq!(state.contents().folder_id(), Some(FolderId(2)));
    assert_eq!(labels(&state), vec!["root", "docs"]);
}

#[tokio::test]
async fn test_open_breadcrumb_rebuilds_folder_missing_from_tree() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    // Tree never loaded: the path alone identifies the folder.
    explorer
        .select_folder(folder(4, "reports", Some(2), false))
        .await
        .expect("select");

    explorer.open_breadcrumb(1).await.expect("open docs");

    let state = explorer.snapshot().await;
    let selected = state.selection().folder().expect("selected folder");
    assert_eq!(selected.id, FolderId(2));
    assert_eq!(selected.name, "docs");
    assert_eq!(selected.parent_id, Some(FolderId(1)));
    assert!(selected.has_children);
}

#[tokio::test]
async fn test_terminal_breadcrumb_is_not_navigable() {
    let api = helpers::seeded();
    let explorer = helpers::explorer(&api);
    explorer
        .select_folder(folder(4, "reports", Some(2), false))
        .await
        .expect("select");
    let calls_before = api.calls().len();

    let terminal = explorer.open_breadcrumb(2).await.unwrap_err();
    let out_of_range = explorer.open_breadcrumb(9).await.unwrap_err();
    let max_index = explorer.open_breadcrumb(usize::MAX).await.unwrap_err();

    assert_eq!(terminal.kind, ErrorKind::Validation);
    assert_eq!(out_of_range.kind, ErrorKind::Validation);
    assert_eq!(max_index.kind, ErrorKind::Validation);
    assert_eq!(api.calls().len(), calls_before);
    let state = explorer.snapshot().await;
    assert_eq!(state.selection().folder().map(|f| f.id), Some(FolderId(4)));
}
