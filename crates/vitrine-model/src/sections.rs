//! Editable marketing copy sections.

use serde::{Deserialize, Serialize};

/// One collapsible FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    /// Question, shown as the summary line
    pub q: String,
    /// Answer, revealed on expand
    pub a: String,
}

/// Free-form marketing copy for every section of the exported page. All fields
/// default to starter copy so a new project renders a complete site before the
/// customer has written a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    /// Main headline
    #[serde(default = "default_hero_title")]
    pub hero_title: String,

    /// Tagline under the headline
    #[serde(default = "default_hero_subtitle")]
    pub hero_subtitle: String,

    /// Primary call-to-action label
    #[serde(default = "default_hero_cta")]
    pub hero_cta: String,

    /// Story section heading
    #[serde(default = "default_story_title")]
    pub story_title: String,

    /// Story section body copy
    #[serde(default = "default_story_body")]
    pub story_body: String,

    /// Craft section heading
    #[serde(default = "default_craft_title")]
    pub craft_title: String,

    /// Craft feature rows, in display order
    #[serde(default = "default_craft_points")]
    pub craft_points: Vec<String>,

    /// Lookbook heading
    #[serde(default = "default_lookbook_title")]
    pub lookbook_title: String,

    /// Customer quotes, in display order
    #[serde(default = "default_testimonials")]
    pub testimonials: Vec<String>,

    /// FAQ entries, in display order
    #[serde(default = "default_faqs")]
    pub faqs: Vec<Faq>,
}

fn default_hero_title() -> String {
    "The New Collection".to_string()
}
fn default_hero_subtitle() -> String {
    "Considered objects, quietly made".to_string()
}
fn default_hero_cta() -> String {
    "Shop the Collection".to_string()
}
fn default_story_title() -> String {
    "A Study in Restraint".to_string()
}
fn default_story_body() -> String {
    "Each piece is made in small batches, balancing proportion, material and finish.".to_string()
}
fn default_craft_title() -> String {
    "Craft & Materials".to_string()
}
fn default_craft_points() -> Vec<String> {
    vec![
        "Hand-finished natural materials".to_string(),
        "Small-batch production runs".to_string(),
        "Hardware built to be repaired".to_string(),
        "Designed to age well".to_string(),
    ]
}
fn default_lookbook_title() -> String {
    "Lookbook".to_string()
}
fn default_testimonials() -> Vec<String> {
    vec![
        "Understated, and impeccably made.".to_string(),
        "The quality is obvious the moment you hold it.".to_string(),
        "Quiet confidence in object form.".to_string(),
    ]
}
fn default_faqs() -> Vec<Faq> {
    vec![
        Faq {
            q: "Where are your pieces made?".to_string(),
            a: "In small partner workshops, each chosen for a single material they know best."
                .to_string(),
        },
        Faq {
            q: "Do you ship internationally?".to_string(),
            a: "Yes, tracked worldwide shipping on every order.".to_string(),
        },
        Faq {
            q: "What is your return policy?".to_string(),
            a: "30-day returns in original condition for a full refund.".to_string(),
        },
    ]
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            hero_title: default_hero_title(),
            hero_subtitle: default_hero_subtitle(),
            hero_cta: default_hero_cta(),
            story_title: default_story_title(),
            story_body: default_story_body(),
            craft_title: default_craft_title(),
            craft_points: default_craft_points(),
            lookbook_title: default_lookbook_title(),
            testimonials: default_testimonials(),
            faqs: default_faqs(),
        }
    }
}
