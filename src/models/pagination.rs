//! Page window shared by the list views (users, notifications).

use serde::{Deserialize, Serialize};

/// `?page=&per_page=` query parameters; both optional and clamped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    const MAX_PER_PAGE: i64 = 100;
    const DEFAULT_PER_PAGE: i64 = 25;

    pub fn limit(&self) -> i64 {
        match self.per_page {
            Some(n) if n > 0 => n.min(Self::MAX_PER_PAGE),
            _ => Self::DEFAULT_PER_PAGE,
        }
    }

    pub fn current_page(&self) -> i64 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    pub fn offset(&self) -> i64 {
        (self.current_page() - 1).saturating_mul(self.limit())
    }
}

/// One page of rows plus the counters a table footer needs.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl<T: Serialize> PagedResult<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        let per_page = pagination.limit();
        let page = pagination.current_page();
        let total_pages = if total <= 0 { 0 } else { (total - 1) / per_page + 1 };
        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_25() {
        let p = Pagination::default();
        assert_eq!((p.limit(), p.offset(), p.current_page()), (25, 0, 1));
    }

    #[test]
    fn non_positive_values_use_defaults() {
        let p = Pagination {
            page: Some(-2),
            per_page: Some(0),
        };
        assert_eq!((p.limit(), p.current_page()), (25, 1));
    }

    #[test]
    fn per_page_is_capped() {
        let p = Pagination {
            page: Some(2),
            per_page: Some(1_000),
        };
        assert_eq!((p.limit(), p.offset()), (100, 100));
    }

    #[test]
    fn paged_result_counters() {
        let p = Pagination {
            page: Some(2),
            per_page: Some(5),
        };
        let result = PagedResult::new(vec!["a"; 5], 12, &p);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_more);

        let empty = PagedResult::<u8>::new(vec![], 0, &Pagination::default());
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_more);
    }
}
