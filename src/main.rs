//! FileHub Browser: interactive explorer for a FileHub folder hierarchy.
//!
//! Wires configuration, logging, the HTTP gateway and the explorer state
//! together, then hands control to the line-oriented shell.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use filehub_client::HttpExplorerClient;
use filehub_core::config::AppConfig;
use filehub_core::error::AppError;
use filehub_explorer::Explorer;

mod render;
mod shell;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Explorer error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FILEHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("FILEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging. Output goes to stderr so it never interleaves
/// with the shell's own output on stdout.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Connect to the API, load the top level, and run the shell.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.client.base_url,
        "Starting FileHub browser"
    );

    let client = HttpExplorerClient::new(&config.client)?;
    let explorer = Explorer::new(Arc::new(client));

    if let Err(e) = explorer.load_top_level().await {
        render::print_error(&format!("Could not load folders: {e}"));
    }

    shell::Shell::new(explorer).run().await
}
