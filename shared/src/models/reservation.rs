//! Reservation Model

use serde::{Deserialize, Serialize};

use super::{CustomerRef, PLACEHOLDER};
use crate::serde_helpers::lenient_i64;

/// Reservation as returned by the listing endpoint
///
/// `time_slot` is kept as the exact string the server sent so exports can
/// reproduce it without reformatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: i64,
    pub time_slot: String,
    pub table_number: i32,
    pub party_size: i32,
    #[serde(default)]
    pub customer: Option<CustomerRef>,
}

impl ReservationRecord {
    /// Customer name, if the server sent one
    pub fn customer_name(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.name.as_deref())
    }

    /// Customer email, if the server sent one
    pub fn customer_email(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.email.as_deref())
    }

    /// Customer name for table display (`—` when absent or empty)
    pub fn display_name(&self) -> &str {
        self.customer_name().filter(|s| !s.is_empty()).unwrap_or(PLACEHOLDER)
    }

    /// Customer email for table display (`—` when absent or empty)
    pub fn display_email(&self) -> &str {
        self.customer_email().filter(|s| !s.is_empty()).unwrap_or(PLACEHOLDER)
    }
}

/// Reservation request payload (public booking form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub time_slot: String,
    /// Accepts a JSON number or a numeric string; `None` when missing or not a number
    #[serde(default, deserialize_with = "lenient_i64")]
    pub party_size: Option<i64>,
}
