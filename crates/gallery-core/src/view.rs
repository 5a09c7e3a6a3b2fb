//! View Derivation
//!
//! Pure functions from (items, query, page, per_page) to what is rendered.

use crate::models::GalleryItem;

/// Visible range label data ("Showing start-end of total")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Case-insensitive substring match on the prompt text.
/// A blank query keeps every item.
pub fn filter_items(items: &[GalleryItem], query: &str) -> Vec<GalleryItem> {
    let q = query.to_lowercase();
    let q = q.trim();
    if q.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.prompt_text().to_lowercase().contains(q))
        .cloned()
        .collect()
}

/// Items shown on `page` (1-based). Out of range yields an empty slice.
pub fn page_slice<T>(filtered: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(filtered.len());
    &filtered[start..end]
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

pub fn page_info(len: usize, page: usize, per_page: usize) -> PageInfo {
    PageInfo {
        start: page.saturating_sub(1) * per_page + 1,
        end: (page * per_page).min(len),
        total: len,
    }
}

/// Key for a rendered card. Manifest ids are not guaranteed unique, so the
/// position on the page is part of the key.
pub fn card_key(position: usize, item: &GalleryItem) -> (usize, u32) {
    (position, item.id)
}

/// Page numbers to show as buttons: at most `size` consecutive pages
/// centered on `current`, shifted to stay full near either end.
pub fn page_window(current: usize, total: usize, size: usize) -> Vec<usize> {
    if total == 0 || size == 0 {
        return Vec::new();
    }
    let span = size - 1;
    let left = span / 2;
    let right = span - left;

    let mut start = current.saturating_sub(left).max(1);
    let mut end = total.min(current + right);

    if end < start + span {
        if start == 1 {
            end = total.min(size);
        } else if end == total {
            start = total.saturating_sub(span).max(1);
        }
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, prompt: Option<&str>) -> GalleryItem {
        GalleryItem {
            id,
            prompt: prompt.map(str::to_string),
            image_filename: None,
            image_src: format!("http://img/{}.png", id),
            timestamp: None,
            detail_url: None,
        }
    }

    #[test]
    fn test_filter_case_insensitive_and_trimmed() {
        let items = vec![
            make_item(1, Some("A Cat on a mat")),
            make_item(2, Some("dog")),
            make_item(3, None),
        ];
        let ids = |v: Vec<GalleryItem>| v.into_iter().map(|i| i.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_items(&items, "  CAT ")), vec![1]);
        assert_eq!(ids(filter_items(&items, "")), vec![1, 2, 3]);
        assert_eq!(ids(filter_items(&items, "   ")), vec![1, 2, 3]);
        assert_eq!(ids(filter_items(&items, "o")), vec![1, 2]);
        assert!(filter_items(&items, "zebra").is_empty());
    }

    #[test]
    fn test_filtered_members_contain_query() {
        let items: Vec<GalleryItem> = ["red fox", "Fox den", "owl", "FOXGLOVE", ""]
            .iter()
            .enumerate()
            .map(|(i, p)| make_item(i as u32, Some(p)))
            .collect();
        for query in ["fox", "OW", " e ", "x d", "nothing"] {
            let needle = query.to_lowercase().trim().to_string();
            for item in filter_items(&items, query) {
                assert!(items.contains(&item));
                assert!(item.prompt_text().to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn test_page_slice_bounds() {
        let data: Vec<u32> = (1..=10).collect();
        assert_eq!(page_slice(&data, 1, 4), &[1, 2, 3, 4]);
        assert_eq!(page_slice(&data, 3, 4), &[9, 10]);
        assert!(page_slice(&data, 4, 4).is_empty());
        assert!(page_slice(&data, 100, 4).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_filtered() {
        let data: Vec<u32> = (1..=23).collect();
        for per_page in [1, 5, 7, 23, 50] {
            let pages = total_pages(data.len(), per_page);
            let mut joined = Vec::new();
            for page in 1..=pages {
                let slice = page_slice(&data, page, per_page);
                assert!(slice.len() <= per_page);
                joined.extend_from_slice(slice);
            }
            assert_eq!(joined, data);
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 24), 0);
        assert_eq!(total_pages(1, 24), 1);
        assert_eq!(total_pages(24, 24), 1);
        assert_eq!(total_pages(25, 24), 2);
        assert_eq!(total_pages(60, 24), 3);
    }

    #[test]
    fn test_page_info() {
        assert_eq!(page_info(60, 2, 24), PageInfo { start: 25, end: 48, total: 60 });
        assert_eq!(page_info(60, 3, 24), PageInfo { start: 49, end: 60, total: 60 });
        assert_eq!(page_info(0, 1, 24), PageInfo { start: 1, end: 0, total: 0 });
    }

    #[test]
    fn test_card_keys_unique_with_duplicate_ids() {
        let page = vec![make_item(5, Some("a")), make_item(5, Some("b")), make_item(6, None)];
        let mut keys: Vec<(usize, u32)> =
            page.iter().enumerate().map(|(pos, item)| card_key(pos, item)).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), page.len());
    }

    #[test]
    fn test_page_window_middle() {
        assert_eq!(page_window(10, 20, 7), vec![7, 8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_page_window_near_start() {
        assert_eq!(page_window(1, 20, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(3, 20, 7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_near_end() {
        assert_eq!(page_window(20, 20, 7), vec![14, 15, 16, 17, 18, 19, 20]);
        assert_eq!(page_window(18, 20, 7), vec![14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_page_window_even_size() {
        assert_eq!(page_window(10, 20, 6), vec![8, 9, 10, 11, 12, 13]);
        assert_eq!(page_window(1, 20, 6), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page_window(20, 20, 6), vec![15, 16, 17, 18, 19, 20]);
        for current in 1..=20 {
            assert!(page_window(current, 20, 4).len() <= 4);
            assert!(page_window(current, 20, 1).len() <= 1);
        }
    }

    #[test]
    fn test_page_window_few_pages() {
        assert_eq!(page_window(1, 3, 7), vec![1, 2, 3]);
        assert_eq!(page_window(3, 3, 7), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1, 7), vec![1]);
        assert!(page_window(1, 0, 7).is_empty());
    }
}
