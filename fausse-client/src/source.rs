//! Data sources behind the admin consoles
//!
//! [`HttpClient`](crate::HttpClient) implements both traits; tests swap in fakes.

use async_trait::async_trait;
use shared::models::{Customer, ReservationRecord};
use shared::request::ReservationListQuery;

use crate::ClientResult;

/// One page of the reservation listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResult {
    pub reservations: Vec<ReservationRecord>,
    /// Number of records matching the filters, across all pages
    pub total: u64,
    /// Page the server actually served
    pub page: u32,
}

#[async_trait]
pub trait ReservationSource: Send + Sync {
    async fn list_reservations(&self, query: &ReservationListQuery) -> ClientResult<ListingResult>;
}

#[async_trait]
pub trait SubscriberSource: Send + Sync {
    async fn list_subscribers(&self) -> ClientResult<Vec<Customer>>;
}
