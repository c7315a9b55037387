//! Zip packaging of an export bundle.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::bundle::Bundle;

/// Errors that can occur while packaging a bundle.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Package a bundle as an in-memory zip archive with the fixed entry names
/// `index.html`, `styles.css` and `main.js`.
pub fn bundle_zip(bundle: &Bundle) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("index.html", options)?;
    zip.write_all(bundle.html.as_bytes())?;

    zip.start_file("styles.css", options)?;
    zip.write_all(bundle.css.as_bytes())?;

    zip.start_file("main.js", options)?;
    zip.write_all(bundle.js.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
