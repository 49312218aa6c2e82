//! File metadata CLI commands.

use clap::{Args, Subcommand};
use dialoguer::Confirm;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use filehub_client::ExplorerApi;
use filehub_core::error::AppError;
use filehub_core::types::{FileId, MetadataId};
use filehub_entity::file::{Metadata, MetadataPatch, NewMetadata};

/// Arguments for metadata commands
#[derive(Debug, Args)]
pub struct MetadataArgs {
    /// Metadata subcommand
    #[command(subcommand)]
    pub command: MetadataCommand,
}

/// Metadata subcommands
#[derive(Debug, Subcommand)]
pub enum MetadataCommand {
    /// Attach a key/value entry to a file
    Add {
        /// File ID
        file_id: FileId,
        /// Entry key
        key: String,
        /// Entry value (plain text or JSON)
        value: String,
    },
    /// Change the value of an entry
    Update {
        /// Metadata entry ID
        id: MetadataId,
        /// New value
        value: String,
    },
    /// Delete an entry
    Delete {
        /// Metadata entry ID
        id: MetadataId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Metadata display row
#[derive(Debug, Tabled)]
struct MetadataRow {
    /// Entry ID
    id: i64,
    /// File ID
    file: i64,
    /// Key
    key: String,
    /// Value
    value: String,
}

impl From<&Metadata> for MetadataRow {
    fn from(entry: &Metadata) -> Self {
        Self {
            id: entry.id.get(),
            file: entry.file_id.get(),
            key: entry.key.clone(),
            value: output::truncate(&entry.value, 60),
        }
    }
}

fn print_entry(entry: &Metadata, format: OutputFormat) {
    output::print_list(&[MetadataRow::from(entry)], std::slice::from_ref(entry), format);
}

/// Execute metadata commands
pub async fn execute(
    args: &MetadataArgs,
    api: &dyn ExplorerApi,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        MetadataCommand::Add {
            file_id,
            key,
            value,
        } => {
            if key.trim().is_empty() || value.trim().is_empty() {
                return Err(AppError::validation("Metadata key and value are required"));
            }
            let entry = api
                .add_metadata(*file_id, &NewMetadata::new(key.as_str(), value.as_str()))
                .await?;
            output::print_success(&format!(
                "Metadata '{}' added to file {} (id: {})",
                entry.key, entry.file_id, entry.id
            ));
            print_entry(&entry, format);
        }
        MetadataCommand::Update { id, value } => {
            let entry = api
                .update_metadata(*id, &MetadataPatch::new(value.as_str()))
                .await?;
            output::print_success(&format!("Metadata '{}' updated", entry.key));
            print_entry(&entry, format);
        }
        MetadataCommand::Delete { id, yes } => {
            if !*yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete metadata entry {id}?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
                if !confirmed {
                    output::print_warning("Deletion cancelled");
                    return Ok(());
                }
            }
            api.delete_metadata(*id).await?;
            output::print_success(&format!("Metadata entry {id} deleted"));
        }
    }

    Ok(())
}
