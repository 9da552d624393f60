//! Configuration loader for Parley.
//!
//! Reads `parley.toml` and deserializes it into [`ParleyConfig`]. A missing
//! file means defaults; a file that exists but cannot be read or parsed is
//! an error, so a typo never silently falls back to production endpoints.

use std::path::Path;

use parley_types::config::ParleyConfig;
use parley_types::error::ConfigError;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parley.toml";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`ParleyConfig::default()`].
/// - If the file cannot be read, returns [`ConfigError::Read`].
/// - If the file fails to parse, returns [`ConfigError::Parse`].
pub async fn load_config(path: &Path) -> Result<ParleyConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(ParleyConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let config = toml::from_str::<ParleyConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply CLI overrides for the listener address.
pub fn apply_server_overrides(config: &mut ParleyConfig, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}
