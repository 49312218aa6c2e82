//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default, so the explorer starts without any
//! configuration file present.

pub mod client;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::client::ClientConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API client settings.
    #[serde(default)]
    pub client: ClientConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// `path` names the base file (with or without the `.toml` extension).
    /// A sibling overlay for `env` is merged on top when present, followed
    /// by environment variables prefixed with `FILEHUB_`, e.g.
    /// `FILEHUB_CLIENT__BASE_URL`.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let base = path.trim_end_matches(".toml");
        let overlay = match std::path::Path::new(base).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                format!("{}/{env}", dir.display())
            }
            _ => env.to_string(),
        };

        tracing::debug!(base, overlay = %overlay, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(
                config::Environment::with_prefix("FILEHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let config = AppConfig::load("does/not/exist/default.toml", "nowhere").expect("load");
        assert_eq!(config.client.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.client.request_timeout_seconds, 0);
        assert!(config.client.api_token.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let parsed: AppConfig = from_json(
            r#"{"client": {"base_url": "http://files.local/api"}}"#,
        );
        assert_eq!(parsed.client.base_url, "http://files.local/api");
        assert_eq!(parsed.logging.format, "pretty");
    }

    fn from_json(json: &str) -> AppConfig {
        serde_json::from_str(json).expect("config should deserialize")
    }
}
