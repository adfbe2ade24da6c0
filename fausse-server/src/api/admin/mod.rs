//! Admin API 模块
//!
//! 所有路由都要求管理令牌。

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin_token;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/admin", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/reservations", get(handler::list_reservations))
        .route("/newsletter", get(handler::list_subscribers))
        .route("/waitlist", get(handler::list_waitlist))
        .layer(middleware::from_fn_with_state(state, require_admin_token))
}
