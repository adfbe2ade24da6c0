//! 业务服务
//!
//! - [`booking`] - 预订: 容量检查、分配桌号、候补
//! - [`listing`] - 管理端预订列表查询
//! - [`notifier`] - 预订确认通知

pub mod booking;
pub mod listing;
pub mod notifier;

pub use booking::{BookingOutcome, book_reservation};
pub use listing::{ListingQuery, ReservationListParams};
pub use notifier::{ConfirmationNotice, ConfirmationNotifier, LogNotifier};
