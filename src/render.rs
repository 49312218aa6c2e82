//! Text rendering of explorer state for the shell.

use filehub_core::types::FolderId;
use filehub_entity::folder::{Folder, FolderContents};
use filehub_entity::navigation::{Breadcrumb, SelectedItem};
use filehub_explorer::{ContentsCache, ExplorerState, TreeStore};

/// Render everything a full-screen view would show, top to bottom.
pub fn screen(state: &ExplorerState) -> String {
    let selection = state.selection();
    let mut out = String::new();
    out.push_str(&tree(state.tree(), selection.folder().map(|f| f.id)));
    out.push('\n');
    out.push_str(&contents(state.contents()));
    out.push('\n');
    out.push_str(&status(selection.folder(), selection.item(), selection.breadcrumbs()));
    out
}

/// The folder tree with expansion and loading markers.
///
/// `▸` collapsed with sub-folders, `▾` expanded, `…` loading. The open
/// folder is marked with `*`.
pub fn tree(tree: &TreeStore, open: Option<FolderId>) -> String {
    if tree.is_initial_loading() {
        return "Loading folders...\n".to_string();
    }
    if tree.folders().is_empty() {
        return "No folders.\n".to_string();
    }

    let mut out = String::new();
    for row in tree.visible_rows() {
        let marker = if row.loading {
            "…"
        } else if row.expanded {
            "▾"
        } else if row.folder.has_children {
            "▸"
        } else {
            " "
        };
        let current = if open == Some(row.folder.id) { "*" } else { " " };
        out.push_str(&format!(
            "{current}{}{marker} {} (#{})\n",
            "  ".repeat(row.depth),
            row.folder.name,
            row.folder.id
        ));
    }
    out
}

/// The open folder's contents.
pub fn contents(cache: &ContentsCache) -> String {
    match (cache.data(), cache.is_loading(), cache.folder_id()) {
        (_, true, _) => "Loading contents...\n".to_string(),
        (None, false, None) => "Select a folder to see its contents.\n".to_string(),
        (None, false, Some(_)) => "Contents unavailable.\n".to_string(),
        (Some(data), false, _) => listing(data),
    }
}

fn listing(data: &FolderContents) -> String {
    if data.is_empty() {
        return "This folder is empty.\n".to_string();
    }
    let mut out = String::new();
    for folder in &data.folders {
        let name = format!("{}/", folder.name);
        out.push_str(&format!("  [dir]  {name:<32} {:>10}  #{}\n", "-", folder.id));
    }
    for file in &data.files {
        out.push_str(&format!(
            "  [file] {:<32} {:>10}  #{}\n",
            file.filename,
            file.human_size(),
            file.id
        ));
    }
    out
}

/// Details of the selected item, metadata values pretty-printed.
pub fn details(item: Option<&SelectedItem>) -> String {
    let mut out = String::new();
    match item {
        None => out.push_str("Nothing selected.\n"),
        Some(SelectedItem::Folder(folder)) => {
            out.push_str(&format!("Folder  {}\n  id      {}\n", folder.name, folder.id));
            let parent = folder
                .parent_id
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("  parent  {parent}\n"));
        }
        Some(SelectedItem::File(file)) => {
            out.push_str(&format!(
                "File    {}\n  id      {}\n  size    {}\n",
                file.filename,
                file.id,
                file.human_size()
            ));
            if let Some(ext) = file.extension() {
                out.push_str(&format!("  type    {ext}\n"));
            }
            if file.metadata.is_empty() {
                out.push_str("  No metadata.\n");
            } else {
                out.push_str("  Metadata:\n");
                for entry in &file.metadata {
                    let value = entry.display_value().replace('\n', "\n      ");
                    out.push_str(&format!("    #{} {} = {}\n", entry.id, entry.key, value));
                }
            }
        }
    }
    out
}

/// The status bar: open folder, selected item, and breadcrumb path.
pub fn status(
    folder: Option<&Folder>,
    item: Option<&SelectedItem>,
    breadcrumbs: &[Breadcrumb],
) -> String {
    let viewing = folder.map(|f| f.name.as_str()).unwrap_or("-");
    let selected = item.map(SelectedItem::label).unwrap_or("-");
    let path: Vec<&str> = breadcrumbs.iter().map(Breadcrumb::label).collect();
    format!("Viewing: {viewing} | Selected: {selected}\n{}\n", path.join(" > "))
}

/// Breadcrumbs with the indices `crumb` accepts. The last entry is the
/// current item and cannot be opened.
pub fn breadcrumb_list(breadcrumbs: &[Breadcrumb]) -> String {
    if breadcrumbs.is_empty() {
        return "No path.\n".to_string();
    }
    let last = breadcrumbs.len() - 1;
    let mut out = String::new();
    for (index, crumb) in breadcrumbs.iter().enumerate() {
        let kind = match crumb {
            Breadcrumb::Folder { .. } => "dir",
            Breadcrumb::File { .. } => "file",
        };
        let current = if index == last { "  (current)" } else { "" };
        out.push_str(&format!("  {index}: [{kind}] {}{current}\n", crumb.label()));
    }
    out
}

/// Print an error line to stderr.
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
