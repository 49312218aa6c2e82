//! Folder listing CLI commands.

use clap::{Args, Subcommand};
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use filehub_client::ExplorerApi;
use filehub_core::error::AppError;
use filehub_core::types::FolderId;
use filehub_entity::file::File;
use filehub_entity::folder::Folder;
use filehub_entity::navigation::ContentItem;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List top-level folders, or the sub-folders of a parent
    List {
        /// Parent folder ID (omit for top level)
        #[arg(short, long)]
        parent: Option<FolderId>,
    },
    /// Show the folders and files directly inside a folder
    Contents {
        /// Folder ID
        id: FolderId,
    },
    /// Show the path from the top level down to a folder
    Ancestry {
        /// Folder ID
        id: FolderId,
    },
}

/// Folder display row
#[derive(Debug, Tabled)]
struct FolderRow {
    /// Folder ID
    id: i64,
    /// Name
    name: String,
    /// Parent ID
    parent: String,
    /// Whether it has sub-folders
    children: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.get(),
            name: folder.name.clone(),
            parent: folder
                .parent_id
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            children: if folder.has_children { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Contents display row
#[derive(Debug, Tabled)]
struct ItemRow {
    /// Kind
    #[tabled(rename = "type")]
    kind: &'static str,
    /// Item ID
    id: i64,
    /// Name
    name: String,
    /// Size
    size: String,
    /// Metadata entries
    metadata: usize,
}

impl From<&ContentItem> for ItemRow {
    fn from(item: &ContentItem) -> Self {
        match item {
            ContentItem::Folder(folder) => Self {
                kind: "folder",
                id: folder.id.get(),
                name: format!("{}/", folder.name),
                size: "-".to_string(),
                metadata: 0,
            },
            ContentItem::File(file) => Self::from(file),
        }
    }
}

impl From<&File> for ItemRow {
    fn from(file: &File) -> Self {
        Self {
            kind: "file",
            id: file.id.get(),
            name: file.filename.clone(),
            size: file.human_size(),
            metadata: file.metadata.len(),
        }
    }
}

/// Ancestry display row
#[derive(Debug, Tabled)]
struct PathRow {
    /// Position from the top level
    level: usize,
    /// Folder ID
    id: i64,
    /// Name
    name: String,
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    api: &dyn ExplorerApi,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::List { parent } => {
            let folders = api.fetch_folders(*parent).await?;
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, &folders, format);
        }
        FolderCommand::Contents { id } => {
            let contents = api.fetch_folder_contents(*id).await?;
            let items: Vec<ContentItem> = contents.items().collect();
            let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
            output::print_list(&rows, &items, format);
            if format == OutputFormat::Table && !contents.is_empty() {
                println!(
                    "{} folder(s), {} file(s)",
                    contents.folders.len(),
                    contents.files.len()
                );
            }
        }
        FolderCommand::Ancestry { id } => {
            let path = api.fetch_ancestry(Some(*id)).await?;
            if format == OutputFormat::Table && !path.is_empty() {
                let joined: Vec<&str> = path.iter().map(|e| e.name.as_str()).collect();
                println!("/{}", joined.join("/"));
            }
            let rows: Vec<PathRow> = path
                .iter()
                .enumerate()
                .map(|(level, entry)| PathRow {
                    level,
                    id: entry.id.get(),
                    name: entry.name.clone(),
                })
                .collect();
            output::print_list(&rows, &path, format);
        }
    }

    Ok(())
}
