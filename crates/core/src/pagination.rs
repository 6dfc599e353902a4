//! Previous/next controls for the listing.
//!
//! The catalog does not report a total count, so "more pages may exist" is
//! inferred from a full page of results.

use crate::query::{MAX_PAGE, QueryState};

/// Pagination controls derived from the current state and result size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    /// Target state of the "Previous" control, if shown.
    pub previous: Option<QueryState>,
    /// Target state of the "Next" control, if shown.
    pub next: Option<QueryState>,
}

impl Pager {
    pub fn new(query: &QueryState, result_count: usize, page_size: u32) -> Self {
        let previous = (query.page > 1).then(|| query.with_page(query.page - 1));
        let next = (has_more(result_count, page_size) && query.page < MAX_PAGE)
            .then(|| query.with_page(query.page + 1));

        Self {
            page: query.page,
            previous,
            next,
        }
    }
}

/// A full page suggests another one follows.
pub fn has_more(result_count: usize, page_size: u32) -> bool {
    page_size > 0 && result_count == page_size as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{MAX_PAGE, PAGE_SIZE, SortOption};

    fn filtered(page: u32) -> QueryState {
        QueryState {
            page,
            search: "phone".to_string(),
            category: "smartphones".to_string(),
            sort: Some(SortOption::ALL[0]),
        }
    }

    #[test]
    fn first_full_page_shows_only_next() {
        let pager = Pager::new(&filtered(1), PAGE_SIZE as usize, PAGE_SIZE);
        assert!(pager.previous.is_none());
        assert_eq!(pager.next, Some(filtered(2)));
    }

    #[test]
    fn short_page_hides_next() {
        let pager = Pager::new(&filtered(3), 7, PAGE_SIZE);
        assert_eq!(pager.previous, Some(filtered(2)));
        assert!(pager.next.is_none());
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn navigation_preserves_filters_in_url() {
        let pager = Pager::new(&filtered(2), PAGE_SIZE as usize, PAGE_SIZE);
        assert_eq!(
            pager.next.unwrap().href(),
            "/?page=3&search=phone&category=smartphones&sort=price_asc"
        );
        assert_eq!(
            pager.previous.unwrap().href(),
            "/?search=phone&category=smartphones&sort=price_asc"
        );
    }

    #[test]
    fn next_shown_iff_count_equals_page_size() {
        for count in 0..=(PAGE_SIZE as usize + 1) {
            assert_eq!(has_more(count, PAGE_SIZE), count == PAGE_SIZE as usize);
        }
        assert!(!has_more(0, 0));
    }

    #[test]
    fn last_addressable_page_has_no_next() {
        let query = QueryState::decode("page=4294967295");
        let pager = Pager::new(&query, PAGE_SIZE as usize, PAGE_SIZE);
        assert_eq!(pager.page, MAX_PAGE);
        assert!(pager.next.is_none());
        assert_eq!(pager.previous.map(|p| p.page), Some(MAX_PAGE - 1));
    }
}
