//! Display formatting for manifest values

use chrono::NaiveDateTime;

/// Format the downloader writes item timestamps in
const ITEM_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Render an item timestamp as `YYYY-MM-DD HH:MM`.
/// Unrecognized values are shown as-is.
pub fn display_timestamp(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, ITEM_TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "1 item" / "n items"
pub fn item_count(n: usize) -> String {
    if n == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_timestamp() {
        assert_eq!(display_timestamp("20250102_030405"), "2025-01-02 03:04");
        assert_eq!(display_timestamp("yesterday"), "yesterday");
        assert_eq!(display_timestamp(""), "");
    }

    #[test]
    fn test_item_count() {
        assert_eq!(item_count(0), "0 items");
        assert_eq!(item_count(1), "1 item");
        assert_eq!(item_count(60), "60 items");
    }
}
