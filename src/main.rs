//! Sora Gallery Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(gallery_core::GalleryConfig::default().log_level);
    mount_to_body(App);
}
