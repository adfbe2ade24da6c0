//! Reservation confirmation notices

use async_trait::async_trait;

/// What a guest is told after a confirmed booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationNotice {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ConfirmationNotice {
    pub fn reservation_confirmed(name: &str, email: &str, slot: &str, table: i32) -> Self {
        Self {
            to: email.to_string(),
            subject: "Your Reservation Confirmation".to_string(),
            body: format!(
                "Hello {name}, your reservation at Cafe Fausse is confirmed for {slot} at table {table}."
            ),
        }
    }
}

/// Delivery channel for confirmation notices
///
/// Delivery failures are logged by the implementation and never fail the booking.
#[async_trait]
pub trait ConfirmationNotifier: Send + Sync {
    async fn send(&self, notice: ConfirmationNotice);
}

/// Writes notices to the log instead of sending mail
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl ConfirmationNotifier for LogNotifier {
    async fn send(&self, notice: ConfirmationNotice) {
        tracing::info!(to = %notice.to, subject = %notice.subject, "{}", notice.body);
    }
}
