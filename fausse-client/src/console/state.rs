//! Console view-state: filters, sort and paging
//!
//! Lives only as long as the console; never persisted.

use shared::request::{DEFAULT_PER_PAGE, PER_PAGE_CHOICES, ReservationListQuery, SortBy, SortOrder};
use shared::response::total_pages;

use super::ConsoleError;

/// Smallest page size an export asks for
pub const EXPORT_MIN_PER_PAGE: u32 = 1000;

/// Filter inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Customer name substring
    pub customer: String,
    /// Table number
    pub table: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Date,
    Customer,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

/// What the console asks the listing endpoint for
///
/// Any change to filters, sort or page size sends the console back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub filters: Filters,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// 1-based
    pub page: u32,
    pub per_page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            sort_by: SortBy::Time,
            sort_order: SortOrder::Asc,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QueryState {
    /// Update one filter. Returns whether the value changed.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            FilterField::Date => &mut self.filters.date,
            FilterField::Customer => &mut self.filters.customer,
            FilterField::Table => &mut self.filters.table,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        self.page = 1;
        true
    }

    /// Same field flips the direction; another field starts ascending
    pub fn toggle_sort(&mut self, field: SortBy) {
        if self.sort_by == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_by = field;
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    pub fn set_per_page(&mut self, per_page: u32) -> Result<bool, ConsoleError> {
        if !PER_PAGE_CHOICES.contains(&per_page) {
            return Err(ConsoleError::UnsupportedPageSize(per_page));
        }
        if self.per_page == per_page {
            return Ok(false);
        }
        self.per_page = per_page;
        self.page = 1;
        Ok(true)
    }

    pub fn total_pages(&self, total: u64) -> u32 {
        total_pages(total, self.per_page)
    }

    /// Current page clamped to `[1, total_pages]`
    pub fn clamped_page(&self, total: u64) -> u32 {
        self.page.clamp(1, self.total_pages(total))
    }

    pub fn has_prev(&self, total: u64) -> bool {
        self.clamped_page(total) > 1
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.clamped_page(total) < self.total_pages(total)
    }

    /// Step one page. Returns whether the page changed; no-op at either end.
    pub fn paginate(&mut self, direction: PageDirection, total: u64) -> bool {
        let last = self.total_pages(total);
        let current = self.clamped_page(total);
        let target = match direction {
            PageDirection::Next => (current + 1).min(last),
            PageDirection::Prev => current.saturating_sub(1).max(1),
        };
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    /// Request for the current page; empty filters are left out
    pub fn to_request(&self, token: &str) -> ReservationListQuery {
        ReservationListQuery {
            token: token.to_string(),
            page: self.page,
            per_page: self.per_page,
            date: ReservationListQuery::non_empty(&self.filters.date),
            customer: ReservationListQuery::non_empty(&self.filters.customer),
            table: ReservationListQuery::non_empty(&self.filters.table),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }

    /// Page size large enough for `total` records, never below 1000
    pub fn export_page_size(total: u64) -> u32 {
        u32::try_from(total)
            .unwrap_or(u32::MAX)
            .max(EXPORT_MIN_PER_PAGE)
    }

    /// Request for every matching record in one page
    ///
    /// `total` is only a hint; the console re-requests when the server
    /// reports more matches.
    pub fn to_export_request(&self, token: &str, total: u64) -> ReservationListQuery {
        ReservationListQuery {
            page: 1,
            per_page: Self::export_page_size(total),
            ..self.to_request(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> QueryState {
        QueryState {
            page,
            ..QueryState::default()
        }
    }

    #[test]
    fn test_defaults() {
        let state = QueryState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, 10);
        assert_eq!(state.sort_by, SortBy::Time);
        assert_eq!(state.sort_order, SortOrder::Asc);
        assert_eq!(state.filters, Filters::default());
    }

    #[test]
    fn test_every_change_resets_page() {
        let mut state = on_page(3);
        assert!(state.set_filter(FilterField::Customer, "ali"));
        assert_eq!(state.page, 1);

        state.page = 4;
        assert!(state.set_filter(FilterField::Date, "2030-05-01"));
        assert_eq!(state.page, 1);

        state.page = 2;
        assert!(state.set_filter(FilterField::Table, "7"));
        assert_eq!(state.page, 1);

        state.page = 2;
        state.toggle_sort(SortBy::Time);
        assert_eq!(state.page, 1);

        state.page = 2;
        state.toggle_sort(SortBy::Table);
        assert_eq!(state.page, 1);

        state.page = 5;
        assert_eq!(state.set_per_page(25), Ok(true));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut state = on_page(3);
        state.filters.table = "7".into();
        assert!(!state.set_filter(FilterField::Table, "7"));
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = QueryState::default();
        state.toggle_sort(SortBy::Time);
        assert_eq!((state.sort_by, state.sort_order), (SortBy::Time, SortOrder::Desc));

        state.toggle_sort(SortBy::Table);
        assert_eq!((state.sort_by, state.sort_order), (SortBy::Table, SortOrder::Asc));

        state.toggle_sort(SortBy::Table);
        assert_eq!(state.sort_order, SortOrder::Desc);
        state.toggle_sort(SortBy::Table);
        assert_eq!(state.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_per_page_choices() {
        let mut state = QueryState::default();
        assert_eq!(state.set_per_page(7), Err(ConsoleError::UnsupportedPageSize(7)));
        assert_eq!(state.per_page, 10);
        assert_eq!(state.set_per_page(10), Ok(false));
        assert_eq!(state.set_per_page(5), Ok(true));
    }

    #[test]
    fn test_pagination_boundaries() {
        let mut state = QueryState::default();
        assert!(!state.paginate(PageDirection::Prev, 23));
        assert_eq!(state.page, 1);

        assert!(state.paginate(PageDirection::Next, 23));
        assert!(state.paginate(PageDirection::Next, 23));
        assert_eq!(state.page, 3);
        assert!(!state.has_next(23));
        assert!(!state.paginate(PageDirection::Next, 23));
        assert_eq!(state.page, 3);

        assert!(state.paginate(PageDirection::Prev, 23));
        assert_eq!(state.page, 2);

        // 空结果只有一页
        let mut empty = QueryState::default();
        assert!(!empty.has_prev(0));
        assert!(!empty.has_next(0));
        assert!(!empty.paginate(PageDirection::Next, 0));
    }

    #[test]
    fn test_out_of_range_page_is_clamped_first() {
        let mut state = on_page(9);
        assert_eq!(state.clamped_page(23), 3);
        assert!(state.has_prev(23));
        assert!(!state.has_next(23));

        assert!(state.paginate(PageDirection::Next, 23));
        assert_eq!(state.page, 3);

        let mut state = on_page(9);
        assert!(state.paginate(PageDirection::Prev, 23));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_boundaries_hold_for_any_total() {
        for total in 0u64..60 {
            for per_page in PER_PAGE_CHOICES {
                let mut state = QueryState {
                    per_page,
                    ..QueryState::default()
                };
                let last = state.total_pages(total);

                assert!(!state.paginate(PageDirection::Prev, total));
                assert_eq!(state.page, 1);

                while state.paginate(PageDirection::Next, total) {}
                assert_eq!(state.page, last, "total={total} per_page={per_page}");
                assert!(!state.paginate(PageDirection::Next, total));
                assert_eq!(state.page, last);
            }
        }
    }

    #[test]
    fn test_request_skips_empty_filters() {
        let mut state = QueryState::default();
        state.set_filter(FilterField::Table, "5");
        state.toggle_sort(SortBy::Table);
        let request = state.to_request("secret");
        assert_eq!(request.token, "secret");
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 10);
        assert_eq!(request.table.as_deref(), Some("5"));
        assert_eq!(request.date, None);
        assert_eq!(request.customer, None);
        assert_eq!(request.sort_by, SortBy::Table);
    }

    #[test]
    fn test_export_request_fetches_everything() {
        let mut state = on_page(3);
        state.filters.customer = "ali".into();

        let request = state.to_export_request("t", 23);
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 1000);
        assert_eq!(request.customer.as_deref(), Some("ali"));

        assert_eq!(state.to_export_request("t", 4321).per_page, 4321);
    }

    #[test]
    fn test_export_page_size() {
        assert_eq!(QueryState::export_page_size(0), EXPORT_MIN_PER_PAGE);
        assert_eq!(QueryState::export_page_size(1001), 1001);
        assert_eq!(QueryState::export_page_size(u64::MAX), u32::MAX);
    }
}
