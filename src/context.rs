//! Gallery Context
//!
//! Shared state provided via Leptos Context API. One signal holds the whole
//! `GalleryState`; the derived views are memos so components only re-render
//! when the slice they read actually changes.

use gallery_core::{view, GalleryConfig, GalleryItem, GalleryState, PageInfo};
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

#[derive(Clone, Copy)]
pub struct GalleryContext {
    pub state: RwSignal<GalleryState>,
    pub config: StoredValue<GalleryConfig>,
    pub filtered: Memo<Vec<GalleryItem>>,
    pub paginated: Memo<Vec<GalleryItem>>,
    pub total_pages: Memo<usize>,
    pub page_info: Memo<PageInfo>,
    pub page_numbers: Memo<Vec<usize>>,
    pub current_page: Memo<usize>,
}

impl GalleryContext {
    pub fn new(config: GalleryConfig) -> Self {
        let state = RwSignal::new(GalleryState::new(&config));

        let filtered = Memo::new(move |_| state.with(|s| view::filter_items(&s.items, &s.query)));
        let current_page = Memo::new(move |_| state.with(|s| s.current_page));
        let per_page = Memo::new(move |_| state.with(|s| s.items_per_page));

        let paginated = Memo::new(move |_| {
            filtered.with(|f| view::page_slice(f, current_page.get(), per_page.get()).to_vec())
        });
        let total_pages = Memo::new(move |_| filtered.with(|f| view::total_pages(f.len(), per_page.get())));
        let page_info = Memo::new(move |_| {
            filtered.with(|f| view::page_info(f.len(), current_page.get(), per_page.get()))
        });
        let window = config.page_window;
        let page_numbers = Memo::new(move |_| view::page_window(current_page.get(), total_pages.get(), window));

        Self {
            state,
            config: StoredValue::new(config),
            filtered,
            paginated,
            total_pages,
            page_info,
            page_numbers,
            current_page,
        }
    }

    pub fn set_query(&self, query: String) {
        self.state.update(|s| s.set_query(query));
    }

    pub fn set_items_per_page(&self, per_page: usize) {
        self.state.update(|s| s.set_items_per_page(per_page));
    }

    /// Out-of-range pages leave the state untouched and notify nobody
    pub fn go_to_page(&self, page: usize) {
        let mut moved = false;
        self.state.maybe_update(|s| {
            moved = s.go_to_page(page);
            moved
        });
        if moved {
            scroll_to_top();
        }
    }

    pub fn previous_page(&self) {
        let current = self.current_page.get_untracked();
        if current > 1 {
            self.go_to_page(current - 1);
        }
    }

    pub fn next_page(&self) {
        let current = self.current_page.get_untracked();
        if current < self.total_pages.get_untracked() {
            self.go_to_page(current + 1);
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Get the gallery context
pub fn use_gallery() -> GalleryContext {
    expect_context::<GalleryContext>()
}
