//! API server command.

use std::path::PathBuf;

use anyhow::Result;

use vitrine_server::{ApiServer, ServerConfig};

use super::load_config;

/// Run the serve command. CLI arguments override vitrine.toml.
pub async fn run(
    port: Option<u16>,
    host: Option<String>,
    data_dir: Option<PathBuf>,
    open: bool,
) -> Result<()> {
    let file_config = load_config()?;

    let config = ServerConfig {
        host: host.unwrap_or(file_config.server.host),
        port: port.unwrap_or(file_config.server.port),
        data_dir: data_dir.unwrap_or_else(|| PathBuf::from(&file_config.store.data_dir)),
        publish_dir: PathBuf::from(&file_config.server.publish_dir),
    };

    tracing::info!("Starting API server on port {}", config.port);

    if open {
        let url = format!("http://{}:{}", config.host, config.port);
        let _ = open::that(&url);
    }

    ApiServer::new(config).start().await?;

    Ok(())
}
