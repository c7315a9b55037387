//! CLI commands and shared configuration loading.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

pub mod export;
pub mod init;
pub mod serve;

/// Configuration file structure (vitrine.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_publish_dir")]
    pub publish_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    4400
}
fn default_publish_dir() -> String {
    "sites".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_minify() -> bool {
    false
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            publish_dir: default_publish_dir(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

/// Load configuration from vitrine.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("vitrine.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read vitrine.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse vitrine.toml: {}", e))?;
        tracing::info!("Loaded config from vitrine.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(config.server.port, 4400);
        assert_eq!(config.store.data_dir, "data");
        assert!(!config.export.minify);
    }

    #[test]
    fn partial_config_overrides_selected_fields() {
        let config: ConfigFile =
            toml::from_str("[server]\nport = 9000\n\n[export]\nminify = true\n").unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.export.minify);
    }
}
