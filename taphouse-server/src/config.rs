//! Configuration for taphouse-server.
//!
//! Loaded from a TOML file; every section has defaults so a missing file
//! simply starts the server on the default listen address.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

/// Webhook delivery configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Timeout for one outbound notification, in seconds.
    #[serde(default = "default_webhook_timeout_secs")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_webhook_timeout_secs(),
        }
    }
}

fn default_webhook_timeout_secs() -> u64 {
    5
}

/// Load the configuration file, applying the CLI listen override.
///
/// A missing file yields the defaults; any other read or parse problem is an
/// error.
pub fn load(path: &Path, listen_override: Option<SocketAddr>) -> Result<FileConfig, ConfigError> {
    let mut config = match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str::<FileConfig>(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            FileConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(listen) = listen_override {
        config.server.listen = listen;
    }

    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            [server]
            listen = "127.0.0.1:9000"

            [webhook]
            timeout_secs = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.webhook.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.webhook.timeout_secs, 5);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("/definitely/not/here.toml"), None).unwrap();
        assert_eq!(config.webhook.timeout_secs, 5);
    }
}
