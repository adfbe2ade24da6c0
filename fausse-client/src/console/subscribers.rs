use std::sync::Arc;

use parking_lot::Mutex;
use shared::models::Customer;

use crate::source::SubscriberSource;

/// Newsletter subscriber as shown in the admin table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Phone number or `—`
    pub phone: String,
}

impl From<&Customer> for SubscriberRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone_or_placeholder().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberView {
    pub rows: Vec<SubscriberRow>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Read-only subscriber list, loaded once when opened
pub struct SubscriberConsole {
    source: Arc<dyn SubscriberSource>,
    view: Mutex<SubscriberView>,
}

impl SubscriberConsole {
    pub fn new(source: Arc<dyn SubscriberSource>) -> Self {
        Self {
            source,
            view: Mutex::new(SubscriberView {
                loading: true,
                ..SubscriberView::default()
            }),
        }
    }

    pub fn view(&self) -> SubscriberView {
        self.view.lock().clone()
    }

    pub async fn load(&self) {
        let result = self.source.list_subscribers().await;
        let mut view = self.view.lock();
        view.loading = false;
        match result {
            Ok(subscribers) => {
                view.rows = subscribers.iter().map(SubscriberRow::from).collect();
                view.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Subscriber listing failed");
                view.error = Some(e.to_string());
            }
        }
    }
}
