//! HTTP client for the Cafe Fausse API

use async_trait::async_trait;
use reqwest::{Client, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    Customer, MenuSection, NewsletterSignup, ReservationCreate, ReservationRecord, WaitlistEntry,
};
use shared::request::ReservationListQuery;
use shared::response::{
    NewsletterSignupResponse, ReservationCreatedResponse, ReservationListResponse,
    SubscriberListResponse, WaitlistResponse,
};
use shared::validation::{MAX_PARTY_SIZE, validate_email, validate_reservation};

use crate::source::{ListingResult, ReservationSource, SubscriberSource};
use crate::{ClientConfig, ClientError, ClientResult};

/// Outcome of `POST /api/reservations`
#[derive(Debug, Clone, PartialEq)]
pub enum BookingReceipt {
    Confirmed(ReservationRecord),
    /// Hour fully booked; the guest is on the waitlist
    Waitlisted { message: String },
}

#[derive(Serialize)]
struct TokenQuery<'a> {
    token: &'a str,
}

/// HTTP client for making network requests to the Cafe Fausse API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    admin_token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            admin_token: config.admin_token.clone(),
        })
    }

    /// Set the admin token
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn require_token(&self) -> ClientResult<&str> {
        self.admin_token.as_deref().ok_or(ClientError::MissingToken)
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies may be JSON (`{ "error": "..." }`) or plain text.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let is_json = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|ct| ct.contains("json"));
            let text = response.text().await.unwrap_or_default();

            let from_json = is_json
                .then(|| serde_json::from_str::<serde_json::Value>(&text).ok())
                .flatten()
                .and_then(|v| v.get("error")?.as_str().map(str::to_string));

            let message = from_json.unwrap_or_else(|| {
                let text = text.trim();
                if text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status.as_u16(), text)
                }
            });

            tracing::debug!(status = status.as_u16(), %message, "Request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Admin API ==========

    /// One page of the admin reservation listing
    ///
    /// A response without a usable `page` is treated as serving the requested page.
    pub async fn list_reservations(&self, query: &ReservationListQuery) -> ClientResult<ListingResult> {
        let body: ReservationListResponse = self.get("/api/admin/reservations", query).await?;
        if !body.success {
            return Err(ClientError::Application(
                body.error
                    .unwrap_or_else(|| "Failed to load reservations".to_string()),
            ));
        }

        Ok(ListingResult {
            reservations: body.reservations,
            total: body.total,
            page: body.page.unwrap_or(query.page),
        })
    }

    /// Newsletter subscribers, ordered by id
    pub async fn list_subscribers(&self) -> ClientResult<Vec<Customer>> {
        let token = self.require_token()?;
        let body: SubscriberListResponse = self
            .get("/api/admin/newsletter", &TokenQuery { token })
            .await?;
        if !body.success {
            return Err(ClientError::Application(
                body.error
                    .unwrap_or_else(|| "Failed to load subscribers".to_string()),
            ));
        }
        Ok(body.subscribers)
    }

    pub async fn list_waitlist(&self) -> ClientResult<Vec<WaitlistEntry>> {
        let token = self.require_token()?;
        let body: WaitlistResponse = self.get("/api/admin/waitlist", &TokenQuery { token }).await?;
        if !body.success {
            return Err(ClientError::Application(
                body.error.unwrap_or_else(|| "Failed to load waitlist".to_string()),
            ));
        }
        Ok(body.waitlist)
    }

    // ========== Public API ==========

    /// Submit a booking after running the form's own checks
    pub async fn create_reservation(&self, request: &ReservationCreate) -> ClientResult<BookingReceipt> {
        let now = chrono::Local::now().naive_local();
        validate_reservation(request, MAX_PARTY_SIZE, now)?;

        let body: ReservationCreatedResponse = self.post("/api/reservations", request).await?;
        match body {
            ReservationCreatedResponse {
                success: true,
                reservation: Some(record),
                ..
            } => Ok(BookingReceipt::Confirmed(record)),
            ReservationCreatedResponse {
                waitlist: true,
                error,
                ..
            } => Ok(BookingReceipt::Waitlisted {
                message: error.unwrap_or_else(|| "Added to the waitlist.".to_string()),
            }),
            ReservationCreatedResponse { error, .. } => Err(ClientError::Application(
                error.unwrap_or_else(|| "Reservation failed".to_string()),
            )),
        }
    }

    pub async fn signup_newsletter(&self, email: &str, name: Option<&str>) -> ClientResult<Customer> {
        let email = email.trim();
        validate_email(email)?;

        let request = NewsletterSignup {
            email: email.to_string(),
            name: name.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string),
        };
        let body: NewsletterSignupResponse = self.post("/api/newsletter", &request).await?;
        match body.customer {
            Some(customer) if body.success => Ok(customer),
            _ => Err(ClientError::Application(
                body.error.unwrap_or_else(|| "Newsletter signup failed".to_string()),
            )),
        }
    }

    pub async fn menu(&self) -> ClientResult<Vec<MenuSection>> {
        let response = self.client.get(self.url("/api/menu")).send().await?;
        Self::handle_response(response).await
    }
}

#[async_trait]
impl ReservationSource for HttpClient {
    async fn list_reservations(&self, query: &ReservationListQuery) -> ClientResult<ListingResult> {
        HttpClient::list_reservations(self, query).await
    }
}

#[async_trait]
impl SubscriberSource for HttpClient {
    async fn list_subscribers(&self) -> ClientResult<Vec<Customer>> {
        HttpClient::list_subscribers(self).await
    }
}
