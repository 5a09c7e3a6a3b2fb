//! Page Size Selector Component

use leptos::prelude::*;

use crate::context::use_gallery;

#[component]
pub fn PageSizeSelect() -> impl IntoView {
    let ctx = use_gallery();
    let per_page = Memo::new(move |_| ctx.state.with(|s| s.items_per_page));
    let options = ctx.config.with_value(|c| c.page_size_options.clone());

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<usize>() {
            Ok(n) => ctx.set_items_per_page(n),
            Err(e) => log::warn!(target: "PageSizeSelect", "bad page size: {}", e),
        }
    };

    view! {
        <label class="page-size">
            "Per page "
            <select on:change=on_change prop:value=move || per_page.get().to_string()>
                {options.into_iter().map(|n| {
                    view! {
                        <option value=n.to_string() selected=move || per_page.get() == n>
                            {n}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
