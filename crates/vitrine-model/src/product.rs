//! Catalog products embedded in a project document.

use serde::{Deserialize, Serialize};

/// A single catalog entry. Products are embedded in their project document and
/// have no identity of their own; catalog order is the order of the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,

    /// Price in USD, must be non-negative
    pub price: f64,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Primary image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Additional product image URLs, in display order
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Product {
    /// Create a product with just a name and price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            image: None,
            gallery: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let product: Product = serde_json::from_str(r#"{"name":"Arc 01","price":420.0}"#).unwrap();

        assert_eq!(product.name, "Arc 01");
        assert_eq!(product.price, 420.0);
        assert_eq!(product.image, None);
        assert!(product.gallery.is_empty());
    }

    #[test]
    fn round_trips_gallery_order() {
        let mut product = Product::new("Meridian 02", 460.0);
        product.gallery = vec!["https://cdn.example/a.jpg".into(), "https://cdn.example/b.jpg".into()];

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(back.gallery, product.gallery);
    }
}
