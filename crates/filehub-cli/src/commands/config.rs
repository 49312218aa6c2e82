//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use super::Cli;
use crate::output::{self, OutputFormat};
use filehub_client::HttpExplorerClient;
use filehub_core::config::AppConfig;
use filehub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration and the API base URL
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = masked(cli.load_config()?);
            let fields = [
                ("Base URL", config.client.base_url.clone()),
                ("Timeout", timeout_label(&config)),
                (
                    "API token",
                    config.client.api_token.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("User agent", config.client.user_agent.clone()),
                ("Log level", config.logging.level.clone()),
                ("Log format", config.logging.format.clone()),
            ];
            output::print_item(&config, &fields, format);
        }
        ConfigCommand::Validate => {
            let checked = cli.load_config().and_then(|config| {
                HttpExplorerClient::new(&config.client)?;
                Ok(config)
            });
            match checked {
                Ok(config) => {
                    output::print_success(&format!("Configuration '{}' is valid", cli.config));
                    output::print_kv("API", &config.client.base_url);
                    output::print_kv("Timeout", &timeout_label(&config));
                    output::print_kv("Logging", &config.logging.level);
                }
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {e}"));
                    return Err(e);
                }
            }
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}

/// Hide the bearer token for display.
fn masked(mut config: AppConfig) -> AppConfig {
    if let Some(token) = config.client.api_token.as_mut() {
        *token = mask_token(token);
    }
    config
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

fn timeout_label(config: &AppConfig) -> String {
    match config.client.request_timeout() {
        Some(timeout) => format!("{}s", timeout.as_secs()),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("short"), "****");
        assert_eq!(mask_token("abcd1234efgh"), "abcd****");
    }
}
