//! Initialize the data directory and seed a starter project.

use std::path::Path;

use anyhow::{Context, Result};

use vitrine_model::Project;
use vitrine_store::ProjectStore;

use super::load_config;

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    // Create default config
    let config_path = Path::new("vitrine.toml");
    if !config_path.exists() || yes {
        std::fs::write(config_path, DEFAULT_CONFIG).context("Failed to write vitrine.toml")?;
        tracing::info!("Created vitrine.toml");
    }

    let config = load_config()?;
    let store = ProjectStore::open(Path::new(&config.store.data_dir))
        .context("Failed to open project store")?;

    if store.count()? > 0 {
        tracing::info!("Store already has projects, skipping seed");
        return Ok(());
    }

    let id = store
        .insert(&Project::default())
        .context("Failed to seed starter project")?;

    tracing::info!("Seeded starter project {}", id);
    tracing::info!("Run 'vitrine serve' to start the API server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vitrine Configuration

[server]
# Listen address for the API server
host = "127.0.0.1"
port = 4400

# Directory published sites are written to and served from
publish_dir = "sites"

[store]
# Directory holding the project collection
data_dir = "data"

[export]
# Minify the exported stylesheet
minify = false
"#;
