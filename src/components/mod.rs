//! UI Components
//!
//! Leptos components of the gallery page.

mod gallery_card;
mod gallery_grid;
mod gallery_header;
mod page_size_select;
mod pagination;
mod search_bar;

pub use gallery_card::GalleryCard;
pub use gallery_grid::GalleryGrid;
pub use gallery_header::GalleryHeader;
pub use page_size_select::PageSizeSelect;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
