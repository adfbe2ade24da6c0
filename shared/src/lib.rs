//! Shared types for the Cafe Fausse workspace
//!
//! Wire models, listing query types, pagination math and input validation
//! used by both `fausse-server` and `fausse-client`.

pub mod models;
pub mod request;
pub mod response;
pub mod serde_helpers;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{CustomerRef, ReservationRecord, PLACEHOLDER};
pub use request::{ReservationListQuery, SortBy, SortOrder};
pub use response::{ErrorResponse, ReservationListResponse, total_pages};
