//! Image-generation stub.
//!
//! Stands in for a real image-generation API: resolves the prompt that would
//! be sent and returns a placeholder URL for the requested slot.

use serde::{Deserialize, Serialize};

/// The image slot a generation request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Hero,
    Lifestyle,
    Closeup,
    Flatlay,
}

impl ImageSlot {
    /// Capitalized label used in the placeholder URL.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Lifestyle => "Lifestyle",
            Self::Closeup => "Closeup",
            Self::Flatlay => "Flatlay",
        }
    }

    /// Canned prompt used when the caller does not supply one.
    pub fn default_prompt(self) -> &'static str {
        match self {
            Self::Hero => {
                "Premium product on a clean stone pedestal, soft natural light, shallow depth of \
                 field, editorial styling, elegant reflections, photorealistic."
            }
            Self::Lifestyle => {
                "Model with the product in a quiet modern street, soft cinematic light, neutral \
                 tones, quiet luxury styling."
            }
            Self::Closeup => {
                "Macro shot of material and hardware detail, extremely realistic textures, crisp \
                 reflections, high detail."
            }
            Self::Flatlay => {
                "Minimalist flat lay of three pieces on concrete, balanced shadows, clean \
                 composition."
            }
        }
    }
}

/// Request body for `POST /api/generate-image`.
#[derive(Debug, Deserialize)]
pub struct ImageGenRequest {
    /// Target slot
    #[serde(rename = "type")]
    pub slot: ImageSlot,

    /// Prompt override
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Response body: the resolved prompt and a placeholder URL.
#[derive(Debug, Serialize)]
pub struct ImageGenResponse {
    #[serde(rename = "type")]
    pub slot: ImageSlot,
    pub prompt: String,
    pub url: String,
}

/// Resolve a generation request without calling any external service.
pub fn generate(req: ImageGenRequest) -> ImageGenResponse {
    let prompt = req
        .prompt
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| req.slot.default_prompt().to_string());

    let url = format!("https://placehold.co/1600x900/png?text={}", req.slot.label());

    ImageGenResponse {
        slot: req.slot,
        prompt,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_canned_prompt_when_none_given() {
        let resp = generate(ImageGenRequest {
            slot: ImageSlot::Hero,
            prompt: None,
        });

        assert_eq!(resp.prompt, ImageSlot::Hero.default_prompt());
        assert_eq!(resp.url, "https://placehold.co/1600x900/png?text=Hero");
    }

    #[test]
    fn caller_prompt_wins() {
        let resp = generate(ImageGenRequest {
            slot: ImageSlot::Flatlay,
            prompt: Some("three frames on marble".to_string()),
        });

        assert_eq!(resp.prompt, "three frames on marble");
    }

    #[test]
    fn slot_names_deserialize_lowercase() {
        let req: ImageGenRequest = serde_json::from_str(r#"{"type":"closeup"}"#).unwrap();

        assert_eq!(req.slot, ImageSlot::Closeup);
    }
}
