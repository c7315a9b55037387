//! The bundle builder: Project in, three text artifacts out.

use std::fs;
use std::path::Path;

use vitrine_model::Project;

use crate::assets;
use crate::templates::{FaqEntry, PageContext, ProductCard, TemplateEngine};

/// Fixed fallback URLs used when an image slot is empty.
pub mod placeholders {
    /// Hero background
    pub const HERO: &str = "https://placehold.co/1600x900?text=Hero";
    /// Product card image
    pub const PRODUCT: &str = "https://placehold.co/800x600?text=Product";
    /// Story section side image
    pub const STORY: &str = "https://placehold.co/1200x1400?text=Lifestyle";
    /// Lookbook slots, in display order
    pub const LOOKBOOK_LIFESTYLE: &str = "https://placehold.co/800x1000";
    pub const LOOKBOOK_FLATLAY: &str = "https://placehold.co/1000x800";
    pub const LOOKBOOK_CLOSEUP: &str = "https://placehold.co/900x900";
}

/// The exported artifact set: a static rendition of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    /// `index.html`
    pub html: String,
    /// `styles.css`
    pub css: String,
    /// `main.js`
    pub js: String,
}

impl Bundle {
    /// Write the bundle to a directory as `index.html`, `styles.css` and
    /// `main.js`, creating the directory if needed.
    pub fn write_to_dir(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        fs::write(dir.join("index.html"), &self.html)?;
        fs::write(dir.join("styles.css"), &self.css)?;
        fs::write(dir.join("main.js"), &self.js)?;
        Ok(())
    }
}

/// Options for a bundle build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Minify the stylesheet with lightningcss
    pub minify_css: bool,
}

/// Errors that can occur while building a bundle. These indicate template
/// bugs, not bad documents; any validated project renders.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to minify stylesheet: {0}")]
    Minify(String),
}

/// Builds export bundles. Holds only the parsed templates; building is a pure
/// function of the project and safe to call from any number of tasks.
pub struct BundleBuilder {
    templates: TemplateEngine,
}

impl BundleBuilder {
    /// Create a builder with the built-in templates.
    pub fn new() -> Self {
        Self {
            templates: TemplateEngine::new(),
        }
    }

    /// Build the export bundle for a project with default options.
    pub fn build(&self, project: &Project) -> Result<Bundle, RenderError> {
        self.build_with(project, ExportOptions::default())
    }

    /// Build the export bundle for a project.
    pub fn build_with(
        &self,
        project: &Project,
        options: ExportOptions,
    ) -> Result<Bundle, RenderError> {
        let ctx = page_context(project);

        let html = self.templates.render_page(&ctx)?;

        let mut css = self.templates.render_stylesheet(&project.theme.accent)?;
        if options.minify_css {
            css = assets::minify_css(&css).map_err(RenderError::Minify)?;
        }

        let js = assets::export_script();

        tracing::debug!(
            products = project.products.len(),
            html_bytes = html.len(),
            "Built export bundle"
        );

        Ok(Bundle { html, css, js })
    }
}

impl Default for BundleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a project into a fully concrete page context: placeholders applied,
/// prices formatted, list order preserved.
fn page_context(project: &Project) -> PageContext {
    let images = &project.images;
    let sections = &project.sections;

    PageContext {
        brand: project.name.clone(),
        hero_title: sections.hero_title.clone(),
        hero_subtitle: sections.hero_subtitle.clone(),
        hero_cta: sections.hero_cta.clone(),
        hero_image: resolve(&images.hero, placeholders::HERO),
        products: project
            .products
            .iter()
            .map(|p| ProductCard {
                name: p.name.clone(),
                price: format_price(p.price),
                image: resolve(&p.image, placeholders::PRODUCT),
            })
            .collect(),
        story_title: sections.story_title.clone(),
        story_body: sections.story_body.clone(),
        story_image: resolve(&images.lifestyle, placeholders::STORY),
        craft_title: sections.craft_title.clone(),
        craft_points: sections.craft_points.clone(),
        lookbook_title: sections.lookbook_title.clone(),
        lookbook_images: vec![
            resolve(&images.lifestyle, placeholders::LOOKBOOK_LIFESTYLE),
            resolve(&images.flatlay, placeholders::LOOKBOOK_FLATLAY),
            resolve(&images.closeup, placeholders::LOOKBOOK_CLOSEUP),
        ],
        testimonials: sections.testimonials.clone(),
        faqs: sections
            .faqs
            .iter()
            .map(|f| FaqEntry {
                q: f.q.clone(),
                a: f.a.clone(),
            })
            .collect(),
    }
}

fn resolve(slot: &Option<String>, placeholder: &str) -> String {
    match slot {
        Some(url) if !url.is_empty() => url.clone(),
        _ => placeholder.to_string(),
    }
}

/// Format a price for display. Whole-number prices keep one decimal place so
/// `420.0` renders as `420.0`, while fractional prices print as-is.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.1}", price)
    } else {
        format!("{}", price)
    }
}
