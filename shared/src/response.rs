//! API Response types
//!
//! Every endpoint answers with a `success` flag. Failures carry an `error`
//! message and, for validation failures, the list of offending messages:
//!
//! ```json
//! { "success": false, "error": "Invalid email format." }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Customer, ReservationRecord, WaitlistEntry};
use crate::serde_helpers::{lenient_count, lenient_page};

/// Number of pages for `total` records at `per_page` per page
///
/// An empty result still has one (empty) page.
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if total == 0 || per_page == 0 {
        return 1;
    }
    let pages = total.div_ceil(per_page as u64).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Failure body shared by all endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

/// Body of `GET /api/admin/reservations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListResponse {
    pub success: bool,
    #[serde(default)]
    pub reservations: Vec<ReservationRecord>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: u64,
    /// Page actually served; authoritative over the requested page
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReservationListResponse {
    pub fn ok(reservations: Vec<ReservationRecord>, total: u64, page: u32, per_page: u32) -> Self {
        Self {
            success: true,
            reservations,
            total,
            page: Some(page),
            per_page: Some(per_page),
            error: None,
        }
    }
}

/// Body of `GET /api/admin/newsletter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberListResponse {
    pub success: bool,
    #[serde(default)]
    pub subscribers: Vec<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `GET /api/admin/waitlist`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
    #[serde(default)]
    pub waitlist: Vec<WaitlistEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/reservations`
///
/// A fully booked hour answers `success: false, waitlist: true` with 202.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreatedResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationRecord>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub waitlist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/newsletter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSignupResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(23, 5), 5);
        assert_eq!(total_pages(23, 25), 1);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_all_small_inputs() {
        for total in 0u64..200 {
            for per_page in 1u32..30 {
                let expected = if total == 0 {
                    1
                } else {
                    ((total as f64) / (per_page as f64)).ceil() as u32
                };
                assert_eq!(total_pages(total, per_page), expected, "total={total} per_page={per_page}");
            }
        }
    }

    #[test]
    fn test_listing_accepts_string_total_and_missing_page() {
        let body: ReservationListResponse =
            serde_json::from_str(r#"{"success":true,"reservations":[],"total":"23"}"#).unwrap();
        assert_eq!(body.total, 23);
        assert_eq!(body.page, None);

        let body: ReservationListResponse =
            serde_json::from_str(r#"{"success":true,"total":null,"page":0}"#).unwrap();
        assert_eq!(body.total, 0);
        assert_eq!(body.page, None);
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Unauthorized")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Unauthorized"}));
    }
}
