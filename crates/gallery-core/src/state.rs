//! Gallery View State
//!
//! Load lifecycle plus the inputs of every derived view. All mutation goes
//! through the handlers below so the page resets stay consistent.

use crate::config::GalleryConfig;
use crate::error::LoadError;
use crate::models::{GalleryItem, Summary};
use crate::view::{self, PageInfo};

/// Load lifecycle. `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub phase: LoadPhase,
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<GalleryItem>,
    pub scrape_date: Option<String>,
    pub total_items: u32,
    pub query: String,
    pub current_page: usize,
    pub items_per_page: usize,
    page_window: usize,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            phase: LoadPhase::Loading,
            loading: true,
            error: None,
            items: Vec::new(),
            scrape_date: None,
            total_items: 0,
            query: String::new(),
            current_page: 1,
            items_per_page: config.default_items_per_page.max(1),
            page_window: config.page_window,
        }
    }

    // ========================
    // Loader
    // ========================

    /// Only meaningful while loading; a finished load never restarts.
    pub fn begin_load(&mut self) {
        if self.phase != LoadPhase::Loading {
            log::warn!("ignoring load start: load already finished");
            return;
        }
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of the one load this instance performs.
    /// Returns false if the load had already finished.
    pub fn finish_load(&mut self, result: Result<(Summary, Vec<GalleryItem>), LoadError>) -> bool {
        if self.phase != LoadPhase::Loading {
            log::warn!("ignoring manifest result: load already finished");
            return false;
        }
        match result {
            Ok((summary, items)) => {
                log::info!("loaded {} gallery items", items.len());
                self.items = items;
                self.total_items = summary.total_items;
                self.scrape_date = Some(summary.scrape_date).filter(|d| !d.is_empty());
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                log::error!("failed to load manifest: {}", err);
                self.error = Some(err.to_string());
                self.phase = LoadPhase::Failed;
            }
        }
        self.loading = false;
        true
    }

    // ========================
    // Interaction Handlers
    // ========================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    /// Zero is ignored: a page holds at least one item.
    pub fn set_items_per_page(&mut self, per_page: usize) {
        if per_page == 0 {
            return;
        }
        self.items_per_page = per_page;
        self.current_page = 1;
    }

    /// Navigate to `page` if it exists. Returns true when navigation
    /// happened; the UI scrolls to top in that case.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.go_to_page(self.current_page - 1)
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.go_to_page(self.current_page + 1)
        } else {
            false
        }
    }

    // ========================
    // Derived Views
    // ========================

    pub fn filtered(&self) -> Vec<GalleryItem> {
        view::filter_items(&self.items, &self.query)
    }

    pub fn paginated(&self) -> Vec<GalleryItem> {
        view::page_slice(&self.filtered(), self.current_page, self.items_per_page).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(self.filtered().len(), self.items_per_page)
    }

    pub fn page_info(&self) -> PageInfo {
        view::page_info(self.filtered().len(), self.current_page, self.items_per_page)
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        view::page_window(self.current_page, self.total_pages(), self.page_window)
    }
}
