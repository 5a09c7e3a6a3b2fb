//! Sora Gallery App
//!
//! Loads the manifest once and lays out search, grid and pagination.

use gallery_core::GalleryConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{GalleryGrid, GalleryHeader, PageSizeSelect, Pagination, SearchBar};
use crate::context::GalleryContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = GalleryContext::new(GalleryConfig::default().validated());
    provide_context(ctx);

    // Single load per instance; nothing here is tracked so the effect runs once
    Effect::new(move |_| {
        ctx.state.update(|s| s.begin_load());
        let config = ctx.config.get_value();
        spawn_local(async move {
            let result = api::fetch_manifest(&config).await;
            ctx.state.update(|s| {
                s.finish_load(result);
            });
        });
    });

    let loading = Memo::new(move |_| ctx.state.with(|s| s.loading));
    let error = Memo::new(move |_| ctx.state.with(|s| s.error.clone()));
    let is_empty = Memo::new(move |_| ctx.state.with(|s| s.items.is_empty()));

    view! {
        <div class="gallery-app">
            <GalleryHeader />

            <div class="toolbar">
                <SearchBar />
                <PageSizeSelect />
            </div>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading gallery..."</div> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <div class="error">"Could not load gallery: " {message}</div> }.into_any()
                } else if is_empty.get() {
                    view! { <div class="empty">"No downloaded items yet."</div> }.into_any()
                } else {
                    view! {
                        <GalleryGrid />
                        <Pagination />
                    }.into_any()
                }
            }}
        </div>
    }
}
