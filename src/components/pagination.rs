//! Pagination Component
//!
//! First / previous / numbered window / next / last. Hidden for a single page.

use leptos::prelude::*;

use crate::context::use_gallery;

#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = use_gallery();
    let current = ctx.current_page;
    let total = ctx.total_pages;

    let at_start = move || current.get() <= 1;
    let at_end = move || current.get() >= total.get();

    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination">
                <button disabled=at_start on:click=move |_| ctx.go_to_page(1)>"«"</button>
                <button disabled=at_start on:click=move |_| ctx.previous_page()>"‹"</button>

                <For
                    each=move || ctx.page_numbers.get()
                    key=|page| *page
                    children=move |page| {
                        let is_active = move || current.get() == page;
                        view! {
                            <button
                                class=move || if is_active() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| ctx.go_to_page(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />

                <button disabled=at_end on:click=move |_| ctx.next_page()>"›"</button>
                <button disabled=at_end on:click=move |_| ctx.go_to_page(total.get_untracked())>"»"</button>
            </nav>
        </Show>
    }
}
