//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod metadata;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use filehub_client::HttpExplorerClient;
use filehub_core::config::AppConfig;
use filehub_core::error::AppError;

/// FileHub: browse folders and edit file metadata over the REST API
#[derive(Debug, Parser)]
#[command(name = "filehub-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay merged over the base file (config/{env}.toml)
    #[arg(short, long, env = "FILEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder listing and navigation
    Folder(folder::FolderArgs),
    /// File metadata management
    Metadata(metadata::MetadataArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, &self.client()?, self.format).await,
            Commands::Metadata(args) => {
                metadata::execute(args, &self.client()?, self.format).await
            }
            Commands::Config(args) => config::execute(args, self, self.format).await,
        }
    }

    /// Load configuration, applying the command-line overrides.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = AppConfig::load(&self.config, &self.env)?;
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        Ok(config)
    }

    /// Build the HTTP client from configuration.
    fn client(&self) -> Result<HttpExplorerClient, AppError> {
        let config = self.load_config()?;
        tracing::debug!(base_url = %config.client.base_url, "Using API");
        HttpExplorerClient::new(&config.client)
    }
}
