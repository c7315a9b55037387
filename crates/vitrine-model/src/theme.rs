//! Cosmetic theme settings and named image slots.

use serde::{Deserialize, Serialize};

/// Color and typography settings. Purely cosmetic string values; only the
/// accent color is injected into the exported stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color, injected as the `--accent` custom property
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Page background color
    #[serde(default = "default_background")]
    pub background: String,

    /// Primary text color
    #[serde(default = "default_text")]
    pub text: String,

    /// Serif font stack for headings
    #[serde(default = "default_serif")]
    pub serif: String,

    /// Sans font stack for body copy
    #[serde(default = "default_sans")]
    pub sans: String,
}

fn default_accent() -> String {
    "#C2A676".to_string()
}
fn default_background() -> String {
    "#FAFAF8".to_string()
}
fn default_text() -> String {
    "#111111".to_string()
}
fn default_serif() -> String {
    "'Playfair Display', serif".to_string()
}
fn default_sans() -> String {
    "Inter, system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            background: default_background(),
            text: default_text(),
            serif: default_serif(),
            sans: default_sans(),
        }
    }
}

/// The four named image slots a site can fill. Each is an absolute URL; empty
/// slots fall back to fixed placeholders at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub hero: Option<String>,

    #[serde(default)]
    pub lifestyle: Option<String>,

    #[serde(default)]
    pub closeup: Option<String>,

    #[serde(default)]
    pub flatlay: Option<String>,
}
