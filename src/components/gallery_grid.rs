//! Gallery Grid Component
//!
//! Current page of the filtered items plus the visible range label.

use gallery_core::view;
use leptos::prelude::*;

use crate::components::GalleryCard;
use crate::context::use_gallery;

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let ctx = use_gallery();
    let page_info = ctx.page_info;

    view! {
        <div class="gallery-results">
            <p class="result-range">
                {move || {
                    let info = page_info.get();
                    if info.total == 0 {
                        "No matching items".to_string()
                    } else {
                        format!("Showing {}–{} of {}", info.start, info.end, info.total)
                    }
                }}
            </p>

            <div class="gallery-grid">
                <For
                    each=move || ctx.paginated.get().into_iter().enumerate()
                    key=|(pos, item)| view::card_key(*pos, item)
                    children=move |(_, item)| view! { <GalleryCard item=item /> }
                />
            </div>
        </div>
    }
}
