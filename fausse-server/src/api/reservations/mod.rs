//! Reservation API 模块 (公共预订表单)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reservations", post(handler::create))
}
