//! Local export command: build a project's bundle from the store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vitrine_render::{bundle_zip, BundleBuilder, ExportOptions};
use vitrine_store::ProjectStore;

use super::load_config;

/// Run the export command.
pub async fn run(id: &str, output: Option<PathBuf>, zip: bool, minify: Option<bool>) -> Result<()> {
    let file_config = load_config()?;

    let store = ProjectStore::open(Path::new(&file_config.store.data_dir))
        .context("Failed to open project store")?;
    let project = store.get(id).context("Failed to load project")?;

    let options = ExportOptions {
        minify_css: minify.unwrap_or(file_config.export.minify),
    };

    let bundle = BundleBuilder::new()
        .build_with(&project, options)
        .context("Failed to build export bundle")?;

    if zip {
        let path =
            output.unwrap_or_else(|| PathBuf::from(format!("{}-{}.zip", project.slug(), id)));
        let bytes = bundle_zip(&bundle).context("Failed to package bundle")?;
        fs::write(&path, bytes).context("Failed to write archive")?;
        tracing::info!("Exported {} to {}", project.name, path.display());
    } else {
        let dir = output.unwrap_or_else(|| PathBuf::from("dist").join(project.slug()));
        bundle
            .write_to_dir(&dir)
            .context("Failed to write bundle")?;
        tracing::info!("Exported {} to {}", project.name, dir.display());
    }

    Ok(())
}
