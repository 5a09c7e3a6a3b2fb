//! Manifest Models
//!
//! Wire types of `summary.json` and the normalized item the UI renders.

use serde::{Deserialize, Deserializer};

/// One entry of the manifest, as written by the downloader
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SummaryItem {
    pub id: u32,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub detail_url: Option<String>,
}

/// The whole manifest document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scrape_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<SummaryItem>,
}

/// `null` reads the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A manifest entry whose image reference resolved to a usable path or URL
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub prompt: Option<String>,
    /// Locally saved filename, if the downloader stored one
    pub image_filename: Option<String>,
    /// Resolved `src` for the `<img>` element
    pub image_src: String,
    pub timestamp: Option<String>,
    pub detail_url: Option<String>,
}

impl GalleryItem {
    /// Prompt text, or empty when the manifest has none
    pub fn prompt_text(&self) -> &str {
        self.prompt.as_deref().unwrap_or("")
    }
}
