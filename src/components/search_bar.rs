//! Search Bar Component
//!
//! Prompt text filter. Every keystroke resets to the first page.

use leptos::prelude::*;

use crate::context::use_gallery;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_gallery();
    let query = Memo::new(move |_| ctx.state.with(|s| s.query.clone()));

    view! {
        <input
            class="search-input"
            type="search"
            placeholder="Search prompts..."
            autocomplete="off"
            prop:value=move || query.get()
            on:input=move |ev| ctx.set_query(event_target_value(&ev))
        />
    }
}
