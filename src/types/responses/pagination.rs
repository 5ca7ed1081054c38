use serde::{Deserialize, Serialize};

/// Page descriptor returned alongside every paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageInfo {
    /// `limit` is assumed already clamped to a positive value.
    pub fn new(current_page: u64, limit: i64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(limit as u64);
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page: limit,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_of_items_over_limit() {
        let info = PageInfo::new(1, 12, 25);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_items, 25);
        assert_eq!(info.items_per_page, 12);
    }

    #[test]
    fn five_matches_with_limit_two_span_three_pages() {
        let info = PageInfo::new(1, 2, 5);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next_page);
        assert!(!info.has_prev_page);
    }

    #[test]
    fn last_page_has_no_next() {
        let info = PageInfo::new(3, 2, 5);
        assert!(!info.has_next_page);
        assert!(info.has_prev_page);
    }

    #[test]
    fn empty_result_has_zero_pages_and_no_navigation() {
        let info = PageInfo::new(1, 12, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next_page);
        assert!(!info.has_prev_page);
    }
}
