//! Waitlist Model

use serde::{Deserialize, Serialize};

use super::CustomerRef;

/// Waitlist entry, created when a requested hour is fully booked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: i64,
    pub time_slot: String,
    #[serde(default)]
    pub customer: Option<CustomerRef>,
}
