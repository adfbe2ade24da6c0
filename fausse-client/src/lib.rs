//! Fausse Client - admin client for the Cafe Fausse API
//!
//! Provides the HTTP client, the reservation query console with CSV export,
//! and the subscriber view used by the admin panel.

pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod http;
pub mod source;

pub use config::ClientConfig;
pub use console::{
    ConsoleError, ConsoleView, FilterField, Filters, PageDirection, QueryState, RefreshOutcome,
    ReservationConsole, SubscriberConsole,
};
pub use error::{ClientError, ClientResult};
pub use export::CsvExport;
pub use http::{BookingReceipt, HttpClient};
pub use source::{ListingResult, ReservationSource, SubscriberSource};

// Re-export shared types for convenience
pub use shared::models::{Customer, MenuSection, ReservationRecord, WaitlistEntry};
pub use shared::request::{ReservationListQuery, SortBy, SortOrder};
