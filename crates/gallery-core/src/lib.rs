//! Gallery Core
//!
//! Target-independent logic behind the gallery UI:
//! - models: manifest wire types and normalized items
//! - manifest: parsing and image-path normalization
//! - view: filtering and pagination (pure functions)
//! - state: view state, load lifecycle and interaction handlers

mod config;
mod error;
pub mod format;
pub mod manifest;
mod models;
mod state;
pub mod view;

pub use config::GalleryConfig;
pub use error::LoadError;
pub use manifest::{check_status, load_manifest, normalize_items, parse_manifest};
pub use models::{GalleryItem, Summary, SummaryItem};
pub use state::{GalleryState, LoadPhase};
pub use view::PageInfo;
