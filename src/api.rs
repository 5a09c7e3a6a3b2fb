//! Manifest Fetch
//!
//! The gallery's only network call.

use gallery_core::{check_status, load_manifest, GalleryConfig, GalleryItem, LoadError, Summary};
use gloo_net::http::Request;
use web_sys::RequestCache;

/// GET the manifest, bypassing the HTTP cache, and normalize its items
pub async fn fetch_manifest(config: &GalleryConfig) -> Result<(Summary, Vec<GalleryItem>), LoadError> {
    log::debug!("fetching {}", config.manifest_path);

    let response = Request::get(&config.manifest_path)
        .cache(RequestCache::NoCache)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))?;

    load_manifest(&body, config)
}
