//! Request types for the reservation listing endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size of the admin listing
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Page sizes offered by the admin console
pub const PER_PAGE_CHOICES: [u32; 3] = [5, 10, 25];

/// Sort key of the reservation listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Time,
    Table,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Time => "time",
            SortBy::Table => "table",
        }
    }

    /// Lenient parse: `table` selects the table number, anything else sorts by time
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("table") => SortBy::Table,
            _ => SortBy::Time,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Lenient parse: missing means ascending, `asc` is ascending, anything else descending
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => SortOrder::Asc,
            Some(v) if v.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            Some(_) => SortOrder::Desc,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query string of `GET /api/admin/reservations`
///
/// Filters are `None` rather than empty strings so they are left out of
/// the encoded query entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListQuery {
    pub token: String,
    pub page: u32,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl ReservationListQuery {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            date: None,
            customer: None,
            table: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }

    /// Keep a filter value only when it is non-empty
    pub fn non_empty(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
