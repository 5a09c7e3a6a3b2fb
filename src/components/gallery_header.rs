//! Gallery Header Component
//!
//! Title plus manifest metadata once loaded.

use gallery_core::format;
use leptos::prelude::*;

use crate::context::use_gallery;

const TITLE: &str = "Sora Gallery";

#[component]
pub fn GalleryHeader() -> impl IntoView {
    let ctx = use_gallery();
    let scrape_date = Memo::new(move |_| ctx.state.with(|s| s.scrape_date.clone()));
    let loaded = Memo::new(move |_| ctx.state.with(|s| s.items.len()));

    view! {
        <header class="gallery-header">
            <h1>{TITLE}</h1>
            <p class="gallery-meta">
                {move || format::item_count(loaded.get())}
                {move || scrape_date.get().map(|d| format!(" · scraped {}", d))}
            </p>
        </header>
    }
}
