//! Gallery Card Component
//!
//! One image with its prompt, timestamp and link back to the source page.

use gallery_core::{format, GalleryItem};
use leptos::prelude::*;

#[component]
pub fn GalleryCard(item: GalleryItem) -> impl IntoView {
    let GalleryItem { id, prompt, image_src, timestamp, detail_url, .. } = item;
    let prompt = prompt.unwrap_or_default();
    let alt = if prompt.is_empty() { format!("Item {}", id) } else { prompt.clone() };
    let timestamp = timestamp.as_deref().map(format::display_timestamp);
    let image_href = image_src.clone();
    let prompt_title = prompt.clone();

    view! {
        <figure class="gallery-card">
            <a href=image_href target="_blank" rel="noopener">
                <img src=image_src alt=alt loading="lazy" />
            </a>
            <figcaption>
                <p class="prompt" title=prompt_title>{prompt}</p>
                <div class="card-meta">
                    <span class="item-id">"#" {id}</span>
                    {timestamp.map(|t| view! { <span class="timestamp">{t}</span> })}
                    {detail_url.map(|url| view! {
                        <a class="detail-link" href=url target="_blank" rel="noopener">"Open on Sora"</a>
                    })}
                </div>
            </figcaption>
        </figure>
    }
}
