#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use fausse_server::db::DbService;
use fausse_server::db::repository::{customer, reservation};
use fausse_server::services::{ConfirmationNotice, ConfirmationNotifier};
use fausse_server::{Config, Server, ServerState};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TOKEN: &str = "test-token";

/// Keeps every notice instead of sending it
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ConfirmationNotice>>,
}

#[async_trait]
impl ConfirmationNotifier for RecordingNotifier {
    async fn send(&self, notice: ConfirmationNotice) {
        self.sent.lock().unwrap().push(notice);
    }
}

pub struct TestApp {
    pub state: ServerState,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::for_tests()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let db = DbService::new(&config.database_url).await.unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let state = ServerState::new(config, db.pool, notifier.clone());
        Self { state, notifier }
    }

    pub fn router(&self) -> Router {
        Server::router(self.state.clone())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::post(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn add_customer(&self, name: &str, email: &str) -> i64 {
        customer::create(self.state.pool(), name, email, None, false)
            .await
            .unwrap()
            .id
    }

    pub async fn add_reservation(&self, customer_id: i64, slot: &str, table: i32, party: i32) -> i64 {
        reservation::insert(self.state.pool(), customer_id, slot, table, party)
            .await
            .unwrap()
    }
}

/// `YYYY-MM-DDTHH:MM` a few days from now at the given hour
pub fn future_slot(days: i64, hour: u32) -> String {
    let day = chrono::Local::now().date_naive() + chrono::TimeDelta::days(days);
    format!("{}T{:02}:00", day.format("%Y-%m-%d"), hour)
}
