//! Customer Model

use serde::{Deserialize, Serialize};

use super::PLACEHOLDER;

/// Customer entity (one row per distinct email)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub newsletter: bool,
}

impl Customer {
    /// Phone number, or the placeholder when none was given
    pub fn phone_or_placeholder(&self) -> &str {
        self.phone.as_deref().filter(|p| !p.is_empty()).unwrap_or(PLACEHOLDER)
    }
}

/// Customer reference embedded in reservation and waitlist records
///
/// Every field may be null on the wire (e.g. a reservation whose customer
/// row is gone).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<&Customer> for CustomerRef {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id),
            name: Some(c.name.clone()),
            email: Some(c.email.clone()),
        }
    }
}

/// Newsletter signup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSignup {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
