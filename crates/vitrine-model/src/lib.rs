//! Project document model for the vitrine site builder.
//!
//! A [`Project`] is the unit of persistence: one document per customer site,
//! holding the product catalog, theme, marketing copy and image slots that the
//! renderer turns into a static bundle. Every field carries a sensible default
//! so a freshly created project already renders as a complete site.

pub mod product;
pub mod project;
pub mod sections;
pub mod theme;
pub mod validate;

pub use product::Product;
pub use project::Project;
pub use sections::{Faq, Sections};
pub use theme::{Images, Theme};
pub use validate::ValidationError;
