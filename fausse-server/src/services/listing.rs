//! 管理端预订列表查询
//!
//! 查询参数按宽松规则解析：无法解析的页码回落到默认值，
//! 无法解析的桌号过滤被忽略，未知排序字段按时间排序。

use serde::Deserialize;
use shared::request::{DEFAULT_PER_PAGE, SortBy, SortOrder};
use shared::response::ReservationListResponse;
use shared::util::parse_date;
use sqlx::SqlitePool;

use crate::db::repository::reservation::{self, PageRequest, ReservationFilter};
use crate::db::repository::RepoResult;
use crate::utils::{AppError, AppResult};

/// Upper bound of `per_page`, large enough for full exports
pub const MAX_PER_PAGE: u32 = 50_000;

/// Raw query string of `GET /api/admin/reservations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationListParams {
    pub token: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub date: Option<String>,
    pub customer: Option<String>,
    pub table: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_positive(value: &Option<String>, default: u32) -> u32 {
    non_empty(value)
        .and_then(|v| v.parse::<i64>().ok())
        .map(|n| n.clamp(1, u32::MAX as i64) as u32)
        .unwrap_or(default)
}

/// Normalised listing query
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filter: ReservationFilter,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl ListingQuery {
    /// Lenient conversion from the raw query string
    ///
    /// A `date` that is not `YYYY-MM-DD` is rejected rather than silently
    /// matching nothing.
    pub fn from_params(params: &ReservationListParams) -> AppResult<Self> {
        let date = match non_empty(&params.date) {
            Some(raw) => Some(
                parse_date(raw)
                    .ok_or_else(|| AppError::validation(format!("Invalid date: {raw}")))?,
            ),
            None => None,
        };

        let filter = ReservationFilter {
            date,
            customer: non_empty(&params.customer).map(str::to_string),
            table: non_empty(&params.table).and_then(|t| t.parse::<i32>().ok()),
        };

        Ok(Self {
            filter,
            sort_by: SortBy::parse_lenient(params.sort_by.as_deref()),
            sort_order: SortOrder::parse_lenient(params.sort_order.as_deref()),
            page: parse_positive(&params.page, 1),
            per_page: parse_positive(&params.per_page, DEFAULT_PER_PAGE).min(MAX_PER_PAGE),
        })
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            limit: self.per_page,
            offset: u64::from(self.page - 1) * u64::from(self.per_page),
        }
    }

    /// Run the count and page queries
    ///
    /// An out-of-range page yields an empty list with the requested page echoed back.
    pub async fn execute(&self, pool: &SqlitePool) -> RepoResult<ReservationListResponse> {
        let total = reservation::count(pool, &self.filter).await?;
        let rows = reservation::list(pool, &self.filter, self.page_request()).await?;

        Ok(ReservationListResponse::ok(
            rows.into_iter().map(Into::into).collect(),
            total,
            self.page,
            self.per_page,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ReservationListParams {
        let mut p = ReservationListParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "page" => p.page = v,
                "per_page" => p.per_page = v,
                "date" => p.date = v,
                "customer" => p.customer = v,
                "table" => p.table = v,
                "sort_by" => p.sort_by = v,
                "sort_order" => p.sort_order = v,
                _ => {}
            }
        }
        p
    }

    #[test]
    fn test_defaults() {
        let q = ListingQuery::from_params(&params(&[])).unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 10);
        assert_eq!(q.sort_by, SortBy::Time);
        assert_eq!(q.sort_order, SortOrder::Asc);
        assert_eq!(q.filter, ReservationFilter::default());
    }

    #[test]
    fn test_lenient_paging() {
        let q = ListingQuery::from_params(&params(&[("page", "abc"), ("per_page", "0")])).unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 1);

        let q = ListingQuery::from_params(&params(&[("page", "-4"), ("per_page", "999999")])).unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, MAX_PER_PAGE);

        let q = ListingQuery::from_params(&params(&[("page", "3"), ("per_page", "10")])).unwrap();
        assert_eq!(q.page_request().offset, 20);
    }

    #[test]
    fn test_filters() {
        let q = ListingQuery::from_params(&params(&[
            ("date", "2030-05-01"),
            ("customer", "  ali "),
            ("table", "x7"),
        ]))
        .unwrap();
        assert_eq!(q.filter.date, parse_date("2030-05-01"));
        assert_eq!(q.filter.customer.as_deref(), Some("ali"));
        assert_eq!(q.filter.table, None);

        let q = ListingQuery::from_params(&params(&[("table", "7"), ("customer", "")])).unwrap();
        assert_eq!(q.filter.table, Some(7));
        assert_eq!(q.filter.customer, None);
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = ListingQuery::from_params(&params(&[("date", "01/05/2030")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
