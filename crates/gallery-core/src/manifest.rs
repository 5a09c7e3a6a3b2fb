//! Manifest Loading
//!
//! Parses `summary.json` and resolves each entry's image reference.

use crate::config::GalleryConfig;
use crate::error::LoadError;
use crate::models::{GalleryItem, Summary, SummaryItem};

/// Parse a manifest body
pub fn parse_manifest(body: &str) -> Result<Summary, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Map a response status to an error unless it is a 2xx success,
/// matching the fetch `Response.ok` rule
pub fn check_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status(status))
    }
}

/// Treat empty strings the same as missing values
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Resolve one entry; `None` when it has no displayable image
fn normalize_item(item: SummaryItem, config: &GalleryConfig) -> Option<GalleryItem> {
    let image_filename = non_empty(item.image_filename);
    let image_src = match &image_filename {
        Some(filename) => config.image_path(filename),
        None => non_empty(item.image_url)?,
    };
    Some(GalleryItem {
        id: item.id,
        prompt: item.prompt,
        image_filename,
        image_src,
        timestamp: item.timestamp,
        detail_url: item.detail_url,
    })
}

/// Resolve image references, preferring the locally saved file over the
/// remote URL, and drop entries that have neither. Order is preserved.
pub fn normalize_items(items: Vec<SummaryItem>, config: &GalleryConfig) -> Vec<GalleryItem> {
    let total = items.len();
    let normalized: Vec<GalleryItem> = items
        .into_iter()
        .filter_map(|item| {
            let id = item.id;
            let resolved = normalize_item(item, config);
            if resolved.is_none() {
                log::debug!("dropping item {}: no image reference", id);
            }
            resolved
        })
        .collect();
    if normalized.len() < total {
        log::info!(
            "{} of {} manifest items have no image and were skipped",
            total - normalized.len(),
            total
        );
    }
    normalized
}

/// Parse and normalize in one step, returning the manifest metadata along
/// with the displayable items
pub fn load_manifest(
    body: &str,
    config: &GalleryConfig,
) -> Result<(Summary, Vec<GalleryItem>), LoadError> {
    let mut summary = parse_manifest(body)?;
    let items = normalize_items(std::mem::take(&mut summary.items), config);
    Ok((summary, items))
}
