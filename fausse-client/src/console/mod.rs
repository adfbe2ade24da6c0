//! Admin consoles
//!
//! - [`ReservationConsole`] - filter / sort / paginate / export over the listing endpoint
//! - [`SubscriberConsole`] - read-only newsletter subscriber view

mod reservations;
mod state;
mod subscribers;

pub use reservations::{ConsoleView, RefreshOutcome, ReservationConsole};
pub use state::{FilterField, Filters, PageDirection, QueryState};
pub use subscribers::{SubscriberConsole, SubscriberRow, SubscriberView};

use thiserror::Error;

/// Errors surfaced by console operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Unsupported page size: {0}")]
    UnsupportedPageSize(u32),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}
