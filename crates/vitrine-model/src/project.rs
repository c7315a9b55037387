//! The top-level persisted project document.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::sections::Sections;
use crate::theme::{Images, Theme};

/// One customer's site configuration. This is the whole persisted document;
/// the document id lives outside it, assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project / brand name
    #[serde(default = "default_name")]
    pub name: String,

    /// Short description of the project
    #[serde(default)]
    pub description: Option<String>,

    /// Product catalog, in display order
    #[serde(default = "default_products")]
    pub products: Vec<Product>,

    /// Colors and typography
    #[serde(default)]
    pub theme: Theme,

    /// Marketing copy
    #[serde(default)]
    pub sections: Sections,

    /// Named image slots
    #[serde(default)]
    pub images: Images,

    /// Last exported HTML, cached on publish
    #[serde(default)]
    pub exported_html: Option<String>,

    /// Relative path of the hosted preview, set on publish
    #[serde(default)]
    pub published_path: Option<String>,
}

fn default_name() -> String {
    "New Project".to_string()
}

fn default_products() -> Vec<Product> {
    vec![
        Product {
            description: Some("Sculptural profile, balanced silhouette".to_string()),
            ..Product::new("Arc 01", 420.0)
        },
        Product {
            description: Some("Slim lines, architectural detail".to_string()),
            ..Product::new("Meridian 02", 460.0)
        },
        Product {
            description: Some("Deep profile, cinematic presence".to_string()),
            ..Product::new("Umbra 03", 480.0)
        },
    ]
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
            products: default_products(),
            theme: Theme::default(),
            sections: Sections::default(),
            images: Images::default(),
            exported_html: None,
            published_path: None,
        }
    }
}

impl Project {
    /// A URL-safe slug of the project name, used for export filenames.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut last_dash = true;

        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.extend(c.to_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }

        let slug = slug.trim_end_matches('-').to_string();
        if slug.is_empty() {
            "site".to_string()
        } else {
            slug
        }
    }
}
