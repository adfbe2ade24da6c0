//! Data models
//!
//! Shared between fausse-server and fausse-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod customer;
pub mod menu;
pub mod reservation;
pub mod waitlist;

// Re-exports
pub use customer::*;
pub use menu::*;
pub use reservation::*;
pub use waitlist::*;

/// Rendered in place of a missing customer name, email or phone
pub const PLACEHOLDER: &str = "—";
