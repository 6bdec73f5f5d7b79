//! Pagination primitives shared by the listing search page and its template.
//!
//! `Paginated` bundles one page of items with the page-link window rendered
//! by the template. Every page link is a pure function of the current page,
//! so the window can be computed once here instead of in the template.

use serde::Serialize;

/// Fixed number of listings one search response may contain.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of records matching the filter, across all pages.
    pub total: usize,
    /// `ceil(total / per_page)`; zero when nothing matches.
    pub total_pages: usize,
    /// Page-link window; `None` marks an ellipsis gap.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: usize, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            total,
            total_pages,
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_set_has_no_page_links() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 1, 0);
        assert_eq!(paginated.total_pages, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn page_zero_is_coerced_to_one() {
        let paginated: Paginated<i32> = Paginated::new(vec![1, 2], 2, 0, 1);
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn small_result_set_lists_every_page() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 22, 3, 3);
        assert_eq!(
            paginated.pages,
            vec![Some(1), Some(2), Some(3)],
            "three pages fit the window without gaps"
        );
    }

    #[test]
    fn large_result_set_elides_middle_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 10, 30);
        assert!(paginated.pages.contains(&None));
        assert_eq!(paginated.pages.first(), Some(&Some(1)));
        assert_eq!(paginated.pages.last(), Some(&Some(30)));
        assert!(paginated.pages.contains(&Some(10)));
    }
}
