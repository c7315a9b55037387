//! Document validation, run at the API boundary.
//!
//! The renderer never validates; anything accepted here renders without error.
//! Validation covers the two document invariants: non-negative prices and
//! well-formed image URLs.

use url::Url;

use crate::project::Project;

/// Ways a project document can violate its invariants.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("product '{name}': price must be non-negative, got {price}")]
    NegativePrice { name: String, price: f64 },

    #[error("{field}: malformed URL '{value}'")]
    MalformedUrl { field: String, value: String },
}

impl Project {
    /// Check the document invariants. Absent optional fields are always valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for product in &self.products {
            if product.price < 0.0 {
                return Err(ValidationError::NegativePrice {
                    name: product.name.clone(),
                    price: product.price,
                });
            }

            if let Some(image) = &product.image {
                check_url(&format!("products.{}.image", product.name), image)?;
            }

            for (i, url) in product.gallery.iter().enumerate() {
                check_url(&format!("products.{}.gallery[{}]", product.name, i), url)?;
            }
        }

        let slots = [
            ("images.hero", &self.images.hero),
            ("images.lifestyle", &self.images.lifestyle),
            ("images.closeup", &self.images.closeup),
            ("images.flatlay", &self.images.flatlay),
        ];

        for (field, slot) in slots {
            if let Some(url) = slot {
                check_url(field, url)?;
            }
        }

        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ValidationError> {
    Url::parse(value).map_err(|_| ValidationError::MalformedUrl {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    Ok(())
}
