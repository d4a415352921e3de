//! Site configuration
//!
//! All presentational inputs to the page views live here: brand name,
//! contact channels, image URLs, theme color, and the animation toggle.
//! The built-in `Default` carries the production copy, so the kernel
//! renders the real site with no config file at all; a TOML file can
//! override any subset of fields.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{FoxdenError, Result};

/// Static configuration consumed by the page views and shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name shown in the header, footer, and og:site_name
    pub brand: String,

    /// Theme color published once in the document head
    pub theme_color: String,

    /// Dial-ready phone number for `tel:` links
    pub phone: String,

    /// Human-readable phone number shown next to the `tel:` link
    pub phone_display: String,

    /// Contact e-mail for `mailto:` links
    pub email: String,

    /// Street address line on the contacts page
    pub address: String,

    /// Opening hours line on the contacts page
    pub hours: String,

    /// Instagram profile URL in the footer
    pub instagram_url: String,

    /// Hero image URL on the home page
    pub hero_image: String,

    /// Gallery image URLs on the barbecue page
    pub bbq_gallery: Vec<String>,

    /// Gallery image URLs on the corporate lunch page
    pub lunch_gallery: Vec<String>,

    /// Whether enter/exit animation styles are emitted; when false the
    /// view swap is instant
    pub animations: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Лисья Нора".to_string(),
            theme_color: "#ffffff".to_string(),
            phone: "+1234567890".to_string(),
            phone_display: "+1 (234) 567‑890".to_string(),
            email: "info@lisyanora.example".to_string(),
            address: "Ул. Примерная, 7 · Город".to_string(),
            hours: "Пн–Чт 12–22 · Пт–Сб 12–23 · Вс 12–21".to_string(),
            instagram_url: "#".to_string(),
            hero_image:
                "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            bbq_gallery: vec![
                "https://images.unsplash.com/photo-1553163147-622ab57be1c7?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
                "https://images.unsplash.com/photo-1625940946487-57b6d30f6d3f?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
                "https://images.unsplash.com/photo-1555992336-03a23c4a2f0e?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ],
            lunch_gallery: vec![
                "https://images.unsplash.com/photo-1565895405160-82dcdc04f3b4?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
                "https://images.unsplash.com/photo-1598514982976-e7d91f6f7c65?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
                "https://images.unsplash.com/photo-1613145993489-48df4e71528a?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ],
            animations: true,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Missing fields fall back to the production defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the TOML is malformed or a field has the
    /// wrong type.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| FoxdenError::Config {
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or `Config` if its
    /// contents do not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
