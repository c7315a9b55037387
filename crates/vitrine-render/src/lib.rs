//! Static export bundle builder for vitrine projects.
//!
//! Renders a [`vitrine_model::Project`] into a three-file static site: one
//! HTML page, one stylesheet and one script. The build is a pure
//! transformation: no I/O, no shared state, and no data-dependent failure
//! modes; empty or missing fields degrade to fixed placeholders.

pub mod archive;
pub mod assets;
pub mod bundle;
pub mod templates;

pub use archive::{bundle_zip, ArchiveError};
pub use bundle::{placeholders, Bundle, BundleBuilder, ExportOptions, RenderError};
