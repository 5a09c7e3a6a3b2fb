//! Gallery Configuration
//!
//! Paths and pagination defaults. There is no runtime source for these;
//! the UI provides `GalleryConfig::default()` through context.

use log::LevelFilter;

const MANIFEST_PATH: &str = "assets/downloads/summary.json";
const IMAGES_BASE: &str = "assets/downloads/images";
const PAGE_SIZE_OPTIONS: &[usize] = &[12, 24, 48, 96];
const DEFAULT_ITEMS_PER_PAGE: usize = 24;
const PAGE_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Relative URL of the manifest
    pub manifest_path: String,
    /// Directory locally saved images are served from
    pub images_base: String,
    /// Choices offered by the page-size selector
    pub page_size_options: Vec<usize>,
    pub default_items_per_page: usize,
    /// Maximum number of page-number buttons
    pub page_window: usize,
    pub log_level: LevelFilter,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_path: MANIFEST_PATH.to_string(),
            images_base: IMAGES_BASE.to_string(),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_window: PAGE_WINDOW,
            log_level: LevelFilter::Info,
        }
    }
}

impl GalleryConfig {
    /// Normalize option lists so the selector always contains the default
    pub fn validated(mut self) -> Self {
        self.page_size_options.retain(|&n| n > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = PAGE_SIZE_OPTIONS.to_vec();
        }
        if self.default_items_per_page == 0 {
            self.default_items_per_page = self.page_size_options[0];
        }
        if !self.page_size_options.contains(&self.default_items_per_page) {
            self.page_size_options.push(self.default_items_per_page);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        if self.page_window == 0 {
            self.page_window = PAGE_WINDOW;
        }
        self
    }

    /// Image path for a locally saved file
    pub fn image_path(&self, filename: &str) -> String {
        format!("{}/{}", self.images_base.trim_end_matches('/'), filename)
    }
}
